use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub fn from(symbol: &str) -> Result<Self, AppError> {
        match symbol {
            "+" => Ok(Operation::Add),
            "-" => Ok(Operation::Subtract),
            "×" | "*" | "x" => Ok(Operation::Multiply),
            "÷" | "/" => Ok(Operation::Divide),
            _ => Err(AppError::ParseCommand(symbol.to_string())),
        }
    }

    pub fn apply(&self, first: f64, second: f64) -> f64 {
        match self {
            Operation::Add => first + second,
            Operation::Subtract => first - second,
            Operation::Multiply => first * second,
            // division by zero shows 0
            Operation::Divide => {
                if second != 0.0 {
                    first / second
                } else {
                    0.0
                }
            }
        }
    }
}

/// A four-function calculator driven one key press at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    current: String,
    previous: Option<String>,
    operation: Option<Operation>,
    waiting_for_number: bool,
    memory: f64,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            current: "0".to_string(),
            previous: None,
            operation: None,
            waiting_for_number: false,
            memory: 0.0,
        }
    }

    pub fn display(&self) -> &str {
        &self.current
    }

    pub fn memory(&self) -> f64 {
        self.memory
    }

    /// Resets everything except memory.
    pub fn clear(&mut self) {
        self.current = "0".to_string();
        self.previous = None;
        self.operation = None;
        self.waiting_for_number = false;
    }

    pub fn input_digit(&mut self, digit: char) -> Result<(), AppError> {
        if !digit.is_ascii_digit() {
            return Err(AppError::Validation(format!("'{}' is not a digit", digit)));
        }

        if self.waiting_for_number {
            self.current = digit.to_string();
            self.waiting_for_number = false;
        } else if self.current == "0" {
            self.current = digit.to_string();
        } else {
            self.current.push(digit);
        }
        Ok(())
    }

    pub fn input_decimal(&mut self) {
        if self.waiting_for_number {
            self.current = "0.".to_string();
            self.waiting_for_number = false;
        } else if !self.current.contains('.') {
            self.current.push('.');
        }
    }

    /// Stores the next operator, first folding any pending one into the display.
    pub fn input_operation(&mut self, next: Operation) {
        let input_value = parse_display(&self.current);

        match (&self.previous, self.operation) {
            (None, _) => self.previous = Some(self.current.clone()),
            (Some(previous), Some(operation)) => {
                let result = operation.apply(parse_display(previous), input_value);
                self.current = format_number(result);
                self.previous = Some(self.current.clone());
            }
            (Some(_), None) => {}
        }

        self.waiting_for_number = true;
        self.operation = Some(next);
    }

    /// `=`: a no-op unless both an operand and an operator are pending.
    pub fn perform_calculation(&mut self) {
        let (Some(previous), Some(operation)) = (&self.previous, self.operation) else {
            return;
        };

        let result = operation.apply(parse_display(previous), parse_display(&self.current));
        self.current = format_number(result);
        self.previous = None;
        self.operation = None;
        self.waiting_for_number = true;
    }

    pub fn memory_store(&mut self) {
        self.memory = parse_display(&self.current);
    }

    pub fn memory_recall(&mut self) {
        self.current = format_number(self.memory);
    }

    pub fn memory_clear(&mut self) {
        self.memory = 0.0;
    }

    pub fn memory_add(&mut self) {
        self.memory += parse_display(&self.current);
    }

    /// Dispatches a key label: digits, `.`, operators, `=`, `C`, `MS`, `MR`, `MC`, `M+`.
    /// Multi-digit labels are typed one digit at a time.
    pub fn press(&mut self, key: &str) -> Result<(), AppError> {
        let key = key.trim();

        match key.to_uppercase().as_str() {
            "." => self.input_decimal(),
            "=" => self.perform_calculation(),
            "C" => self.clear(),
            "MS" => self.memory_store(),
            "MR" => self.memory_recall(),
            "MC" => self.memory_clear(),
            "M+" => self.memory_add(),
            _ if !key.is_empty() && key.chars().all(|c| c.is_ascii_digit() || c == '.') => {
                for c in key.chars() {
                    if c == '.' {
                        self.input_decimal();
                    } else {
                        self.input_digit(c)?;
                    }
                }
            }
            _ => self.input_operation(Operation::from(key)?),
        }
        Ok(())
    }
}

fn parse_display(value: &str) -> f64 {
    value.parse::<f64>().unwrap_or(f64::NAN)
}

/// Shortest text that reads back as the same number; integral values drop the fraction.
/// Magnitudes from 1e21 up, or below 1e-6, switch to exponent form (`1e+21`, `1.5e-7`).
pub fn format_number(value: f64) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let text = format!("{:e}", value);
        return match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => text,
        };
    }
    format!("{}", value)
}
