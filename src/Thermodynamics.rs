/// species enumeration and molar masses
pub mod species;
#[allow(non_snake_case)]
/// NASA-7 coefficient table: enthalpy and heat capacity of the mixture species
pub mod NASA7table;
#[allow(non_snake_case)]
/// tests
pub mod NASA7table_tests;
