// src/verdict/lines.rs

/// Split accumulated child output into non-empty lines.
///
/// Both `\n` and `\r` terminate a line; consecutive terminators and
/// terminators at either end of the text yield no empty entries. Meant to
/// run once, over the complete output of a terminated session; reads only
/// accumulate raw bytes, and splitting never happens mid-stream.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split(['\n', '\r'])
        .filter(|line| !line.is_empty())
        .collect()
}
