//! Use cases orchestrating the domain through the ports.

pub mod delegate_task;
