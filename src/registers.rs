//! The register file and the command dispatcher that runs against it

use crate::ast::{BinaryOp, Command, Operand, RegisterId};
use crate::error::Result;
use crate::number::BigDecimal;
use tracing::{debug, warn};

pub struct Registers {
    values: [BigDecimal; RegisterId::COUNT],
}

impl Registers {
    /// All 26 registers set to zero.
    pub fn new() -> Self {
        Registers {
            values: std::array::from_fn(|_| BigDecimal::new()),
        }
    }

    pub fn get(&self, id: RegisterId) -> &BigDecimal {
        &self.values[id.index()]
    }

    /// Run one command. Returns the line to print for `?` commands.
    ///
    /// The operand is always resolved to its own copy before the target
    /// register is touched, so `a+a` and friends read a stable value.
    pub fn execute(&mut self, command: &Command) -> Result<Option<String>> {
        let (target, op, operand) = match command {
            Command::Print(id) => {
                let line = format!("register {}: {}", id, self.get(*id));
                return Ok(Some(line));
            }
            Command::Update { target, op, operand } => (*target, *op, operand),
        };

        let value = self.resolve(operand)?;
        debug!(register = %target, ?op, operand = %value, "executing");

        let dest = &mut self.values[target.index()];
        let result = match op {
            BinaryOp::Assign => dest.assign(&value),
            BinaryOp::Add => dest.add(&value),
            BinaryOp::Mul => dest.multiply(&value),
            BinaryOp::Pow => dest.power(&value),
            BinaryOp::Div => dest.divide(&value),
        };

        if let Err(fatal) = result {
            warn!(register = %target, ?op, "{}", fatal);
            return Err(fatal);
        }
        Ok(None)
    }

    fn resolve(&self, operand: &Operand) -> Result<BigDecimal> {
        match operand {
            Operand::Literal(digits) => BigDecimal::parse(digits),
            Operand::Register(id) => {
                let mut copy = BigDecimal::new();
                copy.assign(self.get(*id))?;
                Ok(copy)
            }
        }
    }
}

impl Default for Registers {
    fn default() -> Self {
        Registers::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Fatal;
    use crate::parser::parse_command;

    fn run(regs: &mut Registers, line: &str) -> Result<Option<String>> {
        regs.execute(&parse_command(line).unwrap())
    }

    fn show(regs: &mut Registers, ch: char) -> String {
        run(regs, &format!("{}?", ch)).unwrap().unwrap()
    }

    #[test]
    fn test_registers_start_at_zero() {
        let mut regs = Registers::new();
        for ch in 'a'..='z' {
            assert_eq!(show(&mut regs, ch), format!("register {}: 0", ch));
        }
    }

    #[test]
    fn test_assign_and_arithmetic() {
        let mut regs = Registers::new();
        run(&mut regs, "a=1234567").unwrap();
        assert_eq!(show(&mut regs, 'a'), "register a: 1,234,567");

        run(&mut regs, "b=a").unwrap();
        run(&mut regs, "b+1").unwrap();
        assert_eq!(show(&mut regs, 'b'), "register b: 1,234,568");

        run(&mut regs, "b*3").unwrap();
        assert_eq!(show(&mut regs, 'b'), "register b: 3,703,704");

        run(&mut regs, "b/a").unwrap();
        assert_eq!(show(&mut regs, 'b'), "register b: 3");

        run(&mut regs, "b^4").unwrap();
        assert_eq!(show(&mut regs, 'b'), "register b: 81");
    }

    #[test]
    fn test_same_register_on_both_sides() {
        let mut regs = Registers::new();
        run(&mut regs, "a=99").unwrap();
        run(&mut regs, "a+a").unwrap();
        assert_eq!(show(&mut regs, 'a'), "register a: 198");
        run(&mut regs, "a*a").unwrap();
        assert_eq!(show(&mut regs, 'a'), "register a: 39,204");
        run(&mut regs, "a/a").unwrap();
        assert_eq!(show(&mut regs, 'a'), "register a: 1");
        run(&mut regs, "a=a").unwrap();
        assert_eq!(show(&mut regs, 'a'), "register a: 1");
    }

    #[test]
    fn test_fifty_nines_squared() {
        let mut regs = Registers::new();
        run(&mut regs, &format!("a={}", "9".repeat(50))).unwrap();
        run(&mut regs, "b=a").unwrap();
        run(&mut regs, "b^2").unwrap();

        let expected = format!("{}8{}1", "9".repeat(49), "0".repeat(49));
        let printed = show(&mut regs, 'b');
        let digits = printed.trim_start_matches("register b: ");
        assert_eq!(digits.replace(',', ""), expected);
        // 100 digits: groups of three from the units end leave one in front
        assert!(digits.starts_with("9,999,"));
        assert!(digits.ends_with(",000,001"));
        assert_eq!(digits.matches(',').count(), 33);
    }

    #[test]
    fn test_fatal_conditions() {
        let mut regs = Registers::new();
        run(&mut regs, "a=5").unwrap();
        assert_eq!(run(&mut regs, "a/0"), Err(Fatal::DivisionByZero));
        assert_eq!(run(&mut regs, "a/z"), Err(Fatal::DivisionByZero));

        run(&mut regs, &format!("b={}", "9".repeat(500))).unwrap();
        assert_eq!(run(&mut regs, "b+1"), Err(Fatal::Overflow));

        let too_long = format!("c=1{}", "0".repeat(500));
        assert_eq!(run(&mut regs, &too_long), Err(Fatal::Overflow));
    }

    #[test]
    fn test_add_after_short_circuit_power() {
        let mut regs = Registers::new();
        run(&mut regs, "a=1").unwrap();
        run(&mut regs, "a^5").unwrap();
        run(&mut regs, "a+999").unwrap();
        assert_eq!(show(&mut regs, 'a'), "register a: 1,000");
    }

    #[test]
    fn test_power_of_zero_register() {
        let mut regs = Registers::new();
        run(&mut regs, "a^0").unwrap();
        assert_eq!(show(&mut regs, 'a'), "register a: 0");
        run(&mut regs, "b=7").unwrap();
        run(&mut regs, "b^c").unwrap();
        assert_eq!(show(&mut regs, 'b'), "register b: 1");
    }
}
