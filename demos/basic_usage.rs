// ============================================================================
// Basic Usage Example
// ============================================================================

use math_operations::prelude::*;
use math_operations::{float, integer, text};

fn main() {
    println!("=== Math Operations Example ===\n");

    // Per-type modules
    println!("float::add(2.5, 2.5)        = {}", float::add(2.5, 2.5));
    println!("integer::add(2, 3)          = {}", integer::add(2, 3));
    println!("integer::add(i32::MAX, 1)   = {}", integer::add(i32::MAX, 1));
    println!("text::add(\"2.5\", \"2.5\")     = {:?}", text::add("2.5", "2.5"));

    // Generic entry points pick the implementation from the operand type
    println!("\nGeneric entry points:");
    println!("  divide(7, 2)       = {:?}", divide(7, 2));
    println!("  divide(7.0, 2.0)   = {:?}", divide(7.0, 2.0));
    println!("  power(2.0, -1.0)   = {:?}", power(2.0, -1.0));
    println!("  power(2.0, 1.5)    = {:?}", power(2.0, 1.5));
    println!("  power(2, -1)       = {:?}", power(2, -1));
    println!("  square_root(2.0)   = {:?}", square_root(2.0));

    // Errors
    println!("\nErrors:");
    for (label, result) in [
        ("divide(5.0, 0.0)", divide(5.0, 0.0)),
        ("power(0.0, -1.0)", power(0.0, -1.0)),
        ("square_root(-1.0)", square_root(-1.0)),
        ("add(\"invalid\", \"2.5\")", add("invalid", "2.5")),
    ] {
        match result {
            Ok(value) => println!("  {:<24} = {}", label, value),
            Err(err) => println!("  {:<24} -> {:?}: {}", label, err.kind(), err),
        }
    }

    // Runtime dispatch
    println!("\nCalculator:");
    let calc = Calculator::new();
    let operands = [
        (Operand::Integer(9), Operand::Integer(2)),
        (Operand::from("9"), Operand::Integer(2)),
        (Operand::Float(9.0), Operand::from("0.5")),
    ];
    for operation in [
        BinaryOperation::Divide,
        BinaryOperation::Power,
    ] {
        for (lhs, rhs) in &operands {
            match calc.apply(operation, lhs, rhs) {
                Ok(value) => println!("  {}({:?}, {:?}) = {}", operation, lhs, rhs, value),
                Err(err) => println!("  {}({:?}, {:?}) failed: {}", operation, lhs, rhs, err),
            }
        }
    }

    println!("\n=== Example Complete ===");
}
