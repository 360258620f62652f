// Copyright 2025 JiangLong.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! YAML text helpers

use serde::Serialize;

const DOCUMENT_SEPARATOR: &str = "---\n";

/// Serialize `value` to YAML and indent every non-empty line by `indent`
/// spaces.
///
/// The trailing newline emitted by the serializer is dropped and blank
/// lines are left as they are, so the result can be spliced into a
/// surrounding YAML body at any nesting depth.
pub fn serialize_indented<T>(value: &T, indent: usize) -> Result<String, serde_yaml::Error>
where
    T: Serialize + ?Sized,
{
    let yaml = serde_yaml::to_string(value)?;
    Ok(indent_lines(yaml.trim_end_matches('\n'), indent))
}

pub(crate) fn indent_lines(text: &str, indent: usize) -> String {
    let prefix = " ".repeat(indent);
    text.split('\n')
        .map(|line| {
            if line.is_empty() {
                line.to_string()
            } else {
                format!("{}{}", prefix, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render one YAML document, prefixed with a document separator
pub fn to_document<T>(value: &T) -> Result<String, serde_yaml::Error>
where
    T: Serialize + ?Sized,
{
    let body = serde_yaml::to_string(value)?;
    let mut document = String::with_capacity(DOCUMENT_SEPARATOR.len() + body.len());
    document.push_str(DOCUMENT_SEPARATOR);
    document.push_str(&body);
    Ok(document)
}
