// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Value printer.

use super::Arena;
use crate::Body;
use brook_core::{SlotId, Value};

impl Arena {
    /// Render a value for humans.
    ///
    /// Top-level text is printed as is; nested text is quoted. Containers
    /// print their contents: `{name: "Alex", age: 1}`, `[1, "Hello", false]`,
    /// `<function(a, b)>`. An array hole prints as `<empty>` and a run of
    /// holes as `<3 empty items>`. A container reached again while printing
    /// itself prints as `[Circular]`.
    #[must_use]
    pub fn display(&self, value: &Value) -> String {
        if let Value::Text(text) = value {
            return text.to_string();
        }
        let mut out = String::new();
        self.write_value(&mut out, value, &mut Vec::new());
        out
    }

    fn write_value(&self, out: &mut String, value: &Value, path: &mut Vec<SlotId>) {
        match value {
            Value::Text(text) => write_quoted(out, text),
            Value::Object(slot) | Value::Array(slot) | Value::Function(slot) => {
                self.write_container(out, value, *slot, path);
            }
            _ => out.push_str(&value.to_text()),
        }
    }

    fn write_container(
        &self,
        out: &mut String,
        value: &Value,
        slot: SlotId,
        path: &mut Vec<SlotId>,
    ) {
        if path.contains(&slot) {
            out.push_str("[Circular]");
            return;
        }
        let Ok(body) = self.body(slot) else {
            out.push_str(&value.to_text());
            return;
        };

        path.push(slot);
        match body {
            Body::Object(object) => {
                out.push('{');
                for (i, (name, member)) in object.properties.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    self.write_entry(out, name, member, path);
                }
                out.push('}');
            }
            Body::Array(array) => {
                out.push('[');
                let mut first = true;
                let mut next = 0;
                for (index, member) in array.elements() {
                    write_separator(out, &mut first);
                    if index > next {
                        write_holes(out, index - next);
                        out.push_str(", ");
                    }
                    self.write_slot(out, member, path);
                    next = index + 1;
                }
                if array.len() > next {
                    write_separator(out, &mut first);
                    write_holes(out, array.len() - next);
                }
                for (name, member) in array.properties.iter() {
                    write_separator(out, &mut first);
                    self.write_entry(out, name, member, path);
                }
                out.push(']');
            }
            Body::Function(function) => {
                out.push_str("<function(");
                for (i, param) in function.params.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    out.push_str(param);
                }
                out.push_str(")>");
            }
        }
        path.pop();
    }

    fn write_entry(&self, out: &mut String, name: &str, member: SlotId, path: &mut Vec<SlotId>) {
        out.push_str(name);
        out.push_str(": ");
        self.write_slot(out, member, path);
    }

    fn write_slot(&self, out: &mut String, member: SlotId, path: &mut Vec<SlotId>) {
        match self.value(member) {
            Ok(value) => self.write_value(out, value, path),
            Err(_) => out.push_str("<dangling>"),
        }
    }
}

fn write_separator(out: &mut String, first: &mut bool) {
    if !*first {
        out.push_str(", ");
    }
    *first = false;
}

/// A single hole prints as `<empty>`, a run as `<n empty items>`.
fn write_holes(out: &mut String, count: u32) {
    if count == 1 {
        out.push_str("<empty>");
    } else {
        out.push_str(&format!("<{count} empty items>"));
    }
}

fn write_quoted(out: &mut String, text: &str) {
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
}
