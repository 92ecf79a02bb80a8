// ==========================================
// 先修条件 - 词法扫描
// ==========================================
// 课程代码: 1~4 个字母 + 可选单个空格 + 1~3 位数字 + 可选 ".数字" 后缀
// 连接词: and / or（不区分大小写），"/" 与 "|" 视同 or
// 其余文本一律丢弃
// ==========================================

use crate::domain::course::canonical_code;

const MAX_PREFIX_LETTERS: usize = 4;
const MAX_NUMBER_DIGITS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Code(String), // 规范代码
    And,
    Or,
    LParen,
    RParen,
}

/// 扫描先修描述文本
pub fn tokenize(text: &str) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_ascii_alphabetic() {
            let end = run_end(&chars, i, |ch| ch.is_ascii_alphabetic());
            let word: String = chars[i..end].iter().collect();

            if word.eq_ignore_ascii_case("and") {
                tokens.push(Token::And);
                i = end;
                continue;
            }
            if word.eq_ignore_ascii_case("or") {
                tokens.push(Token::Or);
                i = end;
                continue;
            }

            // 连接词紧贴在前一个代码之后，例如 "CS101andMA111"
            if let Some((connective, prefix_start)) = glued_connective(&chars, i, end) {
                if end - prefix_start <= MAX_PREFIX_LETTERS {
                    if let Some(code_end) = scan_code_number(&chars, end) {
                        let raw: String = chars[prefix_start..code_end].iter().collect();
                        tokens.push(connective);
                        tokens.push(Token::Code(canonical_code(&raw)));
                        i = code_end;
                        continue;
                    }
                }
            }

            if end - i <= MAX_PREFIX_LETTERS {
                if let Some(code_end) = scan_code_number(&chars, end) {
                    let raw: String = chars[i..code_end].iter().collect();
                    tokens.push(Token::Code(canonical_code(&raw)));
                    i = code_end;
                    continue;
                }
            }

            // 超长字母段或后面不是编号：整段丢弃
            i = end;
            continue;
        }

        match c {
            '(' => tokens.push(Token::LParen),
            ')' => tokens.push(Token::RParen),
            '/' | '|' => tokens.push(Token::Or),
            _ => {}
        }
        i += 1;
    }

    tokens
}

/// 紧跟数字的字母段若以 and/or 开头，返回连接词与剩余字母段起点
fn glued_connective(chars: &[char], start: usize, end: usize) -> Option<(Token, usize)> {
    if start == 0 || !chars[start - 1].is_ascii_digit() {
        return None;
    }
    let word: String = chars[start..end].iter().collect::<String>().to_ascii_lowercase();
    let (token, len) = if word.starts_with("and") {
        (Token::And, 3)
    } else if word.starts_with("or") {
        (Token::Or, 2)
    } else {
        return None;
    };
    (start + len < end).then_some((token, start + len))
}

/// 从 start 开始，满足条件的连续字符的结束位置
fn run_end(chars: &[char], start: usize, pred: impl Fn(char) -> bool) -> usize {
    let mut end = start;
    while end < chars.len() && pred(chars[end]) {
        end += 1;
    }
    end
}

/// 扫描字母段之后的编号部分，成功时返回代码结束位置
fn scan_code_number(chars: &[char], letters_end: usize) -> Option<usize> {
    let mut pos = letters_end;
    if chars.get(pos) == Some(&' ') {
        pos += 1;
    }

    let digits_end = run_end(chars, pos, |ch| ch.is_ascii_digit());
    let digit_count = digits_end - pos;
    if digit_count == 0 || digit_count > MAX_NUMBER_DIGITS {
        return None;
    }

    // 可选小数后缀，例如 MA111.5
    if chars.get(digits_end) == Some(&'.') {
        let suffix_end = run_end(chars, digits_end + 1, |ch| ch.is_ascii_digit());
        if suffix_end > digits_end + 1 {
            return Some(suffix_end);
        }
    }

    Some(digits_end)
}
