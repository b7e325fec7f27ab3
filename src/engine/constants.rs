// Capacity limits for the calculator engine

/// Maximum number of characters on the input line
pub const INPUT_SIZE: usize = 20;

/// Capacity of the operand stack
pub const STACK_SIZE: usize = 100;

/// Capacity of the memory queue
pub const QUEUE_SIZE: usize = 50;
