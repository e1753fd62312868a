mod builtins;

use std::rc::Rc;

use crate::ast::{
    BlockStatement, Expression, HashLiteral, IfExpression, Program, Statement,
};
use crate::object::{Environment, HashKey, HashObj, Value};

/// Recursive AST walker. Holds the three interned singletons (`true`,
/// `false`, `null`) so identity comparisons (`Rc::ptr_eq`) agree with value
/// comparisons for booleans and null.
pub struct Evaluator {
    truth: Rc<Value>,
    falsehood: Rc<Value>,
    null: Rc<Value>,
}

impl Evaluator {
    pub fn new() -> Self {
        Self {
            truth: Rc::new(Value::Boolean(true)),
            falsehood: Rc::new(Value::Boolean(false)),
            null: Rc::new(Value::Null),
        }
    }

    fn native_bool(&self, value: bool) -> Rc<Value> {
        if value {
            self.truth.clone()
        } else {
            self.falsehood.clone()
        }
    }

    fn error(&self, message: impl Into<String>) -> Rc<Value> {
        Rc::new(Value::Error(message.into()))
    }

    pub fn eval_program(&self, program: &Program, env: &Environment) -> Rc<Value> {
        let mut result = self.null.clone();
        for statement in &program.statements {
            result = self.eval_statement(statement, env);
            match result.as_ref() {
                Value::ReturnValue(inner) => return inner.clone(),
                Value::Error(_) => return result,
                _ => {}
            }
        }
        result
    }

    fn eval_block_statement(&self, block: &BlockStatement, env: &Environment) -> Rc<Value> {
        let mut result = self.null.clone();
        for statement in &block.statements {
            result = self.eval_statement(statement, env);
            if matches!(result.as_ref(), Value::ReturnValue(_) | Value::Error(_)) {
                return result;
            }
        }
        result
    }

    fn eval_statement(&self, statement: &Statement, env: &Environment) -> Rc<Value> {
        match statement {
            Statement::ExpressionStmt(stmt) => self.eval_expression(&stmt.expression, env),
            Statement::Return(stmt) => {
                let value = self.eval_expression(&stmt.value, env);
                if value.is_error() {
                    return value;
                }
                Rc::new(Value::ReturnValue(value))
            }
            Statement::Let(stmt) => {
                let value = self.eval_expression(&stmt.value, env);
                if value.is_error() {
                    return value;
                }
                env.set(stmt.name.name.clone(), value.clone());
                value
            }
            Statement::Block(block) => self.eval_block_statement(block, env),
        }
    }

    fn eval_expression(&self, expression: &Expression, env: &Environment) -> Rc<Value> {
        match expression {
            Expression::IntegerLiteral(lit) => Rc::new(Value::Integer(lit.value)),
            Expression::BooleanLiteral(lit) => self.native_bool(lit.value),
            Expression::StringLiteral(lit) => Rc::new(Value::Str(lit.value.clone())),
            Expression::Identifier(ident) => self.eval_identifier(&ident.name, env),
            Expression::Prefix(expr) => {
                let right = self.eval_expression(&expr.right, env);
                if right.is_error() {
                    return right;
                }
                self.eval_prefix_expression(&expr.operator, right)
            }
            Expression::Infix(expr) => {
                let left = self.eval_expression(&expr.left, env);
                if left.is_error() {
                    return left;
                }
                let right = self.eval_expression(&expr.right, env);
                if right.is_error() {
                    return right;
                }
                self.eval_infix_expression(&expr.operator, left, right)
            }
            Expression::If(expr) => self.eval_if_expression(expr, env),
            Expression::FunctionLiteral(lit) => Rc::new(Value::Function {
                parameters: lit.parameters.clone(),
                body: lit.body.clone(),
                env: env.clone(),
            }),
            Expression::Call(expr) => {
                let function = self.eval_expression(&expr.function, env);
                if function.is_error() {
                    return function;
                }
                let args = self.eval_expressions(&expr.arguments, env);
                if args.len() == 1 && args[0].is_error() {
                    return args.into_iter().next().unwrap();
                }
                self.apply_function(function, args)
            }
            Expression::ArrayLiteral(lit) => {
                let elements = self.eval_expressions(&lit.elements, env);
                if elements.len() == 1 && elements[0].is_error() {
                    return elements.into_iter().next().unwrap();
                }
                Rc::new(Value::Array(elements))
            }
            Expression::HashLiteral(lit) => self.eval_hash_literal(lit, env),
            Expression::Index(expr) => {
                let left = self.eval_expression(&expr.left, env);
                if left.is_error() {
                    return left;
                }
                let index = self.eval_expression(&expr.index, env);
                if index.is_error() {
                    return index;
                }
                self.eval_index_expression(left, index)
            }
        }
    }

    fn eval_expressions(&self, exprs: &[Expression], env: &Environment) -> Vec<Rc<Value>> {
        let mut results = vec![];
        for expr in exprs {
            let value = self.eval_expression(expr, env);
            if value.is_error() {
                return vec![value];
            }
            results.push(value);
        }
        results
    }

    fn eval_identifier(&self, name: &str, env: &Environment) -> Rc<Value> {
        if let Some(value) = env.get(name) {
            return value;
        }
        if let Some(builtin) = builtins::lookup(name) {
            return builtin;
        }
        self.error(format!("identifier not found: {name}"))
    }

    fn eval_prefix_expression(&self, operator: &str, right: Rc<Value>) -> Rc<Value> {
        match operator {
            "!" => self.native_bool(!right.is_truthy()),
            "-" => match right.as_ref() {
                Value::Integer(i) => Rc::new(Value::Integer(-i)),
                other => self.error(format!("unknown operator: -{}", other.kind_name())),
            },
            _ => self.error(format!("unknown operator: {operator}{}", right.kind_name())),
        }
    }

    fn eval_infix_expression(&self, operator: &str, left: Rc<Value>, right: Rc<Value>) -> Rc<Value> {
        match (left.as_ref(), right.as_ref()) {
            (Value::Integer(l), Value::Integer(r)) => self.eval_integer_infix(operator, *l, *r),
            (Value::Str(l), Value::Str(r)) => self.eval_string_infix(operator, l, r),
            (Value::Boolean(l), Value::Boolean(r)) => match operator {
                "==" => self.native_bool(l == r),
                "!=" => self.native_bool(l != r),
                _ => self.error(format!(
                    "unknown operator: BOOLEAN {operator} BOOLEAN"
                )),
            },
            (l, r) if l.kind_name() != r.kind_name() => self.error(format!(
                "type mismatch: {} {operator} {}",
                l.kind_name(),
                r.kind_name()
            )),
            (l, r) => self.error(format!(
                "unknown operator: {} {operator} {}",
                l.kind_name(),
                r.kind_name()
            )),
        }
    }

    fn eval_integer_infix(&self, operator: &str, left: i64, right: i64) -> Rc<Value> {
        match operator {
            "+" => Rc::new(Value::Integer(left.wrapping_add(right))),
            "-" => Rc::new(Value::Integer(left.wrapping_sub(right))),
            "*" => Rc::new(Value::Integer(left.wrapping_mul(right))),
            "/" => {
                if right == 0 {
                    self.error("division by zero")
                } else {
                    Rc::new(Value::Integer(left.wrapping_div(right)))
                }
            }
            "<" => self.native_bool(left < right),
            ">" => self.native_bool(left > right),
            "==" => self.native_bool(left == right),
            "!=" => self.native_bool(left != right),
            _ => self.error(format!("unknown operator: INTEGER {operator} INTEGER")),
        }
    }

    fn eval_string_infix(&self, operator: &str, left: &str, right: &str) -> Rc<Value> {
        match operator {
            "+" => Rc::new(Value::Str(format!("{left}{right}"))),
            "==" => self.native_bool(left == right),
            "!=" => self.native_bool(left != right),
            _ => self.error(format!("unknown operator: STRING {operator} STRING")),
        }
    }

    fn eval_if_expression(&self, expr: &IfExpression, env: &Environment) -> Rc<Value> {
        let condition = self.eval_expression(&expr.condition, env);
        if condition.is_error() {
            return condition;
        }
        if condition.is_truthy() {
            self.eval_block_statement(&expr.consequence, env)
        } else if let Some(alternative) = &expr.alternative {
            self.eval_block_statement(alternative, env)
        } else {
            self.null.clone()
        }
    }

    fn eval_hash_literal(&self, literal: &HashLiteral, env: &Environment) -> Rc<Value> {
        let mut hash = HashObj::new();
        for (key_expr, value_expr) in &literal.pairs {
            let key_value = self.eval_expression(key_expr, env);
            if key_value.is_error() {
                return key_value;
            }
            let hash_key = match HashKey::from_value(&key_value) {
                Some(key) => key,
                None => {
                    return self.error(format!(
                        "unusable as hash key: {}",
                        key_value.kind_name()
                    ))
                }
            };
            let value = self.eval_expression(value_expr, env);
            if value.is_error() {
                return value;
            }
            hash.insert(hash_key, key_value, value);
        }
        Rc::new(Value::Hash(hash))
    }

    fn eval_index_expression(&self, left: Rc<Value>, index: Rc<Value>) -> Rc<Value> {
        match (left.as_ref(), index.as_ref()) {
            (Value::Array(elements), Value::Integer(i)) => {
                if *i < 0 || *i as usize >= elements.len() {
                    self.null.clone()
                } else {
                    elements[*i as usize].clone()
                }
            }
            (Value::Hash(hash), index_value) => match HashKey::from_value(index_value) {
                Some(key) => hash.get(&key).unwrap_or_else(|| self.null.clone()),
                None => self.error(format!("unusable as hash key: {}", index_value.kind_name())),
            },
            (other, _) => self.error(format!(
                "index operator not supported: {}",
                other.kind_name()
            )),
        }
    }

    fn apply_function(&self, function: Rc<Value>, args: Vec<Rc<Value>>) -> Rc<Value> {
        match function.as_ref() {
            Value::Function {
                parameters,
                body,
                env,
            } => {
                if parameters.len() != args.len() {
                    return self.error(format!(
                        "wrong number of arguments: expected {}, got {}",
                        parameters.len(),
                        args.len()
                    ));
                }
                let call_env = Environment::new_enclosed(env.clone());
                for (param, arg) in parameters.iter().zip(args) {
                    call_env.set(param.name.clone(), arg);
                }
                let evaluated = self.eval_block_statement(body, &call_env);
                match evaluated.as_ref() {
                    Value::ReturnValue(inner) => inner.clone(),
                    _ => evaluated,
                }
            }
            Value::Builtin(_, func) => func(&args),
            other => self.error(format!("not a function: {}", other.kind_name())),
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use crate::parser::Parser;

    fn eval(input: &str) -> Rc<Value> {
        let mut parser = Parser::new(Lexer::new(input));
        let program = parser.parse_program();
        assert!(
            parser.errors().is_empty(),
            "parser errors: {:?}",
            parser.errors()
        );
        let evaluator = Evaluator::new();
        let env = Environment::new();
        evaluator.eval_program(&program, &env)
    }

    #[test]
    fn evaluates_integer_arithmetic() {
        assert_eq!(*eval("5 + 5 + 5 + 5 - 10"), Value::Integer(10));
        assert_eq!(
            *eval("(5 + 10 * 2 + 15 / 3) * 2 + -10"),
            Value::Integer(50)
        );
    }

    #[test]
    fn nested_return_unwinds_through_both_blocks() {
        let input = "if (10 > 1) { if (10 > 1) { return 10; } return 1; }";
        assert_eq!(*eval(input), Value::Integer(10));
    }

    #[test]
    fn closures_capture_their_defining_environment() {
        let input =
            "let newAdder = fn(x) { fn(y) { x + y } }; let addTwo = newAdder(2); addTwo(2);";
        assert_eq!(*eval(input), Value::Integer(4));
    }

    #[test]
    fn type_mismatch_reports_both_kinds() {
        assert_eq!(
            *eval("5 + true;"),
            Value::Error("type mismatch: INTEGER + BOOLEAN".into())
        );
    }

    #[test]
    fn unbound_identifier_is_an_error() {
        assert_eq!(
            *eval("foobar"),
            Value::Error("identifier not found: foobar".into())
        );
    }

    #[test]
    fn len_builtin_counts_characters() {
        assert_eq!(*eval(r#"len("hello world")"#), Value::Integer(11));
    }

    #[test]
    fn unhashable_key_in_index_is_an_error() {
        assert_eq!(
            *eval(r#"{"name": "Monkey"}[fn(x){x}]"#),
            Value::Error("unusable as hash key: FUNCTION".into())
        );
    }

    #[test]
    fn division_by_zero_is_an_error() {
        assert_eq!(*eval("10 / 0"), Value::Error("division by zero".into()));
    }

    #[test]
    fn wrong_arity_is_an_error() {
        assert_eq!(
            *eval("let f = fn(a, b) { a + b }; f(1);"),
            Value::Error("wrong number of arguments: expected 2, got 1".into())
        );
    }

    #[test]
    fn array_index_out_of_range_is_null() {
        assert_eq!(*eval("[1, 2, 3][10]"), Value::Null);
        assert_eq!(*eval("[1, 2, 3][-1]"), Value::Null);
    }

    #[test]
    fn hash_literal_round_trips_through_indexing() {
        assert_eq!(*eval(r#"{"a": 1, "b": 2}["b"]"#), Value::Integer(2));
    }

    #[test]
    fn bang_negates_truthiness() {
        assert_eq!(*eval("!true"), Value::Boolean(false));
        assert_eq!(*eval("!5"), Value::Boolean(false));
        assert_eq!(*eval("!!5"), Value::Boolean(true));
    }

    #[test]
    fn puts_builtin_returns_null() {
        assert_eq!(*eval(r#"puts("hi")"#), Value::Null);
    }
}
