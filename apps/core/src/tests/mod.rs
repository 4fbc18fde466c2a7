//! Test Module
//!
//! Cross-module test suite for the Mailsort core.
//!
//! ## Test Categories
//! - `pipeline_tests`: normalization through classification on whole e-mails
//! - `orchestrator_tests`: AI path, fallback on every AI failure, mock and HTTP clients
//! - `integration_tests`: end-to-end analysis of realistic e-mails

pub mod integration_tests;
