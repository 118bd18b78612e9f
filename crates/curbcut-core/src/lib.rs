//! Core validation engine for the curbcut accessibility checker
//!
//! The pipeline: build a semantic tree (directly through [`tree::Element`]
//! or from markup through [`html::parse_document`]), then hand it to
//! [`engine::ValidationEngine`], which runs the check battery and returns
//! a report of violations. The `aria` module holds the role and property
//! vocabulary the checks consult; `name` resolves accessible names;
//! `idrefs` tracks `id` targets for reference validation.

pub mod aria;
pub mod checks;
pub mod config;
pub mod engine;
pub mod html;
pub mod idrefs;
pub mod name;
pub mod tree;
pub mod violation;
