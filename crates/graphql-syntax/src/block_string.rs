use crate::source::split_lines;

/// Produces the semantic value of a block string from its raw content
/// (the text between the `"""` delimiters, with `\"""` already unescaped).
///
/// Removes the common indentation of every line after the first, then
/// drops leading and trailing blank lines. Lines are rejoined with `\n`
/// regardless of the original terminators.
pub fn dedent_block_string_value(raw: &str) -> String {
    let lines: Vec<&str> = split_lines(raw).collect();

    let mut common_indent: Option<usize> = None;
    for line in lines.iter().skip(1) {
        let indent = leading_whitespace(line);
        if indent == line.len() {
            continue;
        }
        if common_indent.is_none_or(|common| indent < common) {
            common_indent = Some(indent);
            if indent == 0 {
                break;
            }
        }
    }

    let mut lines: Vec<&str> = match common_indent {
        Some(common) if common > 0 => lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                if i == 0 {
                    *line
                } else {
                    line.get(common..).unwrap_or("")
                }
            })
            .collect(),
        _ => lines,
    };

    while lines.first().is_some_and(|line| is_blank(line)) {
        lines.remove(0);
    }
    while lines.last().is_some_and(|line| is_blank(line)) {
        lines.pop();
    }
    lines.join("\n")
}

/// Byte length of the run of spaces and tabs at the start of `line`.
fn leading_whitespace(line: &str) -> usize {
    line.bytes()
        .take_while(|b| *b == b' ' || *b == b'\t')
        .count()
}

fn is_blank(line: &str) -> bool {
    leading_whitespace(line) == line.len()
}
