pub mod turn_formula;
