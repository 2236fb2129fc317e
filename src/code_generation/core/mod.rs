pub mod action;
pub mod generator;
pub mod ledger;
pub mod validator;
