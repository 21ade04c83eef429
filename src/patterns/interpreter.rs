use crate::core::{Category, Demo, Result, Transcript};

/// Boolean grammar over names: terminals match a word in the context, the
/// non-terminals combine sub-expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Terminal(String),
    Or(Box<Expression>, Box<Expression>),
    And(Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn terminal(word: &str) -> Self {
        Expression::Terminal(word.to_string())
    }

    pub fn or(left: Expression, right: Expression) -> Self {
        Expression::Or(Box::new(left), Box::new(right))
    }

    pub fn and(left: Expression, right: Expression) -> Self {
        Expression::And(Box::new(left), Box::new(right))
    }

    pub fn interpret(&self, context: &str) -> bool {
        match self {
            Expression::Terminal(word) => context.contains(word.as_str()),
            Expression::Or(left, right) => left.interpret(context) || right.interpret(context),
            Expression::And(left, right) => left.interpret(context) && right.interpret(context),
        }
    }
}

/// `Robert`, `John` and `Tom` are male names in this toy grammar.
fn male_expression() -> Expression {
    Expression::or(
        Expression::or(Expression::terminal("Robert"), Expression::terminal("John")),
        Expression::terminal("Tom"),
    )
}

/// `Julie` must also be married for this rule to hold.
fn married_woman_expression() -> Expression {
    Expression::and(Expression::terminal("Julie"), Expression::terminal("Married"))
}

pub struct InterpreterDemo;

impl Demo for InterpreterDemo {
    fn name(&self) -> &'static str {
        "interpreter"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn summary(&self) -> &'static str {
        "Boolean name expressions interpreted against a context"
    }

    fn run(&self, transcript: &mut Transcript) -> Result<()> {
        let is_male = male_expression();
        for name in ["John", "Tom", "Alice"] {
            transcript.note(format!("{} is male? {}", name, is_male.interpret(name)));
        }

        let is_married_woman = married_woman_expression();
        for context in ["Married Julie", "Julie"] {
            transcript.note(format!(
                "{} is a married woman? {}",
                context,
                is_married_woman.interpret(context)
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_matches_context() {
        let expr = Expression::terminal("John");
        assert!(expr.interpret("John Smith"));
        assert!(!expr.interpret("Jane Smith"));
    }

    #[test]
    fn test_or_and_combinators() {
        let either = Expression::or(Expression::terminal("a"), Expression::terminal("b"));
        assert!(either.interpret("b"));

        let both = Expression::and(Expression::terminal("a"), Expression::terminal("b"));
        assert!(!both.interpret("b"));
        assert!(both.interpret("ab"));
    }

    #[test]
    fn test_demo_answers_each_query() {
        let mut transcript = Transcript::new();
        InterpreterDemo.run(&mut transcript).unwrap();
        assert!(transcript.contains("John is male? true"));
        assert!(transcript.contains("Alice is male? false"));
        assert!(transcript.contains("Married Julie is a married woman? true"));
        assert!(transcript.contains("Julie is a married woman? false"));
    }
}
