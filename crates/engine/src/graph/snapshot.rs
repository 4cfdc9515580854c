//! Graph snapshot tests and algorithm execution.
