/// synthetic duct host and demo tasks
pub mod gsi_examples;
