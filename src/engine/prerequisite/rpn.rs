// ==========================================
// 先修条件 - 中缀 → 逆波兰 (调度场算法)
// ==========================================
// 优先级: and (2) > or (1)，左结合
// 多余的右括号忽略；未闭合的左括号丢弃
// ==========================================

use super::tokenizer::Token;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RpnItem {
    Code(String),
    And,
    Or,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StackOp {
    And,
    Or,
    LParen,
}

impl StackOp {
    fn precedence(self) -> u8 {
        match self {
            StackOp::And => 2,
            StackOp::Or => 1,
            StackOp::LParen => 0,
        }
    }

    fn into_item(self) -> Option<RpnItem> {
        match self {
            StackOp::And => Some(RpnItem::And),
            StackOp::Or => Some(RpnItem::Or),
            StackOp::LParen => None,
        }
    }
}

/// 将词法单元序列转换为逆波兰序列
pub fn to_rpn(tokens: &[Token]) -> Vec<RpnItem> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<StackOp> = Vec::new();

    for token in tokens {
        match token {
            Token::Code(code) => output.push(RpnItem::Code(code.clone())),
            Token::And | Token::Or => {
                let op = if *token == Token::And {
                    StackOp::And
                } else {
                    StackOp::Or
                };
                while let Some(&top) = stack.last() {
                    if top == StackOp::LParen || top.precedence() < op.precedence() {
                        break;
                    }
                    stack.pop();
                    output.extend(top.into_item());
                }
                stack.push(op);
            }
            Token::LParen => stack.push(StackOp::LParen),
            Token::RParen => {
                if !stack.contains(&StackOp::LParen) {
                    continue;
                }
                while let Some(top) = stack.pop() {
                    if top == StackOp::LParen {
                        break;
                    }
                    output.extend(top.into_item());
                }
            }
        }
    }

    while let Some(top) = stack.pop() {
        output.extend(top.into_item());
    }

    output
}
