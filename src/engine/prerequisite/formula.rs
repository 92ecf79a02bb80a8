// ==========================================
// 先修条件 - 析取范式
// ==========================================
// 形状: 子句列表（或），每个子句为课程代码集合（且）
// 空公式 = 无先修要求，恒满足
// ==========================================

use super::rpn::{to_rpn, RpnItem};
use super::tokenizer::{tokenize, Token};
use crate::domain::course::canonical_code;
use std::collections::{BTreeSet, HashSet};
use tracing::debug;

type Clause = BTreeSet<String>;

/// 可满足性判断结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Satisfaction {
    Satisfied,
    /// 所有子句的缺失代码并集
    Unsatisfied { missing: BTreeSet<String> },
}

impl Satisfaction {
    pub fn is_satisfied(&self) -> bool {
        matches!(self, Satisfaction::Satisfied)
    }
}

// ==========================================
// PrerequisiteFormula - 先修公式 (DNF)
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrerequisiteFormula {
    clauses: Vec<Clause>,
}

impl PrerequisiteFormula {
    /// 空公式
    pub fn empty() -> Self {
        Self::default()
    }

    /// 由子句直接构造（代码自动规范化，空子句丢弃）
    pub fn from_clauses<I, C, S>(clauses: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let clauses = clauses
            .into_iter()
            .map(|clause| {
                clause
                    .into_iter()
                    .map(|code| canonical_code(code.as_ref()))
                    .filter(|code| !code.is_empty())
                    .collect::<Clause>()
            })
            .filter(|clause| !clause.is_empty())
            .collect();
        Self { clauses }
    }

    /// 解析先修描述文本
    pub fn parse(text: &str) -> Self {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return Self::empty();
        }

        let rpn = to_rpn(&tokens);
        match reduce_rpn(&rpn) {
            Some(clauses) => Self { clauses },
            None => {
                let formula = Self::degenerate(&tokens);
                debug!(
                    text = %text,
                    code_count = formula.referenced_codes().len(),
                    "先修表达式格式异常，降级为全部必修"
                );
                formula
            }
        }
    }

    /// 降级公式：文本中出现的全部代码作为单个子句
    fn degenerate(tokens: &[Token]) -> Self {
        let all: Clause = tokens
            .iter()
            .filter_map(|t| match t {
                Token::Code(code) => Some(code.clone()),
                _ => None,
            })
            .collect();

        if all.is_empty() {
            Self::empty()
        } else {
            Self { clauses: vec![all] }
        }
    }

    pub fn clauses(&self) -> &[BTreeSet<String>] {
        &self.clauses
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// 公式中出现的全部代码
    pub fn referenced_codes(&self) -> BTreeSet<String> {
        self.clauses.iter().flatten().cloned().collect()
    }

    /// 是否存在一个子句的全部代码都在可用集合中
    pub fn is_satisfied_by(&self, available: &HashSet<String>) -> bool {
        self.is_empty()
            || self
                .clauses
                .iter()
                .any(|clause| clause.iter().all(|code| available.contains(code)))
    }

    /// 判断可满足性；不满足时返回所有子句缺失代码的并集
    pub fn evaluate(&self, available: &HashSet<String>) -> Satisfaction {
        if self.is_satisfied_by(available) {
            return Satisfaction::Satisfied;
        }

        let missing = self
            .clauses
            .iter()
            .flatten()
            .filter(|code| !available.contains(*code))
            .cloned()
            .collect();
        Satisfaction::Unsatisfied { missing }
    }
}

/// 逆波兰求值为子句列表；栈下溢或结果不唯一时返回 None
fn reduce_rpn(rpn: &[RpnItem]) -> Option<Vec<Clause>> {
    let mut stack: Vec<Vec<Clause>> = Vec::new();

    for item in rpn {
        match item {
            RpnItem::Code(code) => stack.push(vec![Clause::from([code.clone()])]),
            RpnItem::Or => {
                let right = stack.pop()?;
                let mut left = stack.pop()?;
                for clause in right {
                    push_unique(&mut left, clause);
                }
                stack.push(left);
            }
            RpnItem::And => {
                let right = stack.pop()?;
                let left = stack.pop()?;
                let mut product = Vec::with_capacity(left.len() * right.len());
                for l in &left {
                    for r in &right {
                        push_unique(&mut product, l.union(r).cloned().collect());
                    }
                }
                stack.push(product);
            }
        }
    }

    if stack.len() == 1 {
        stack.pop()
    } else {
        None
    }
}

fn push_unique(clauses: &mut Vec<Clause>, clause: Clause) {
    if !clauses.contains(&clause) {
        clauses.push(clause);
    }
}
