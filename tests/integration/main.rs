//! Integration tests for the DocVault HTTP API.

mod helpers;

mod document_test;
mod folder_test;
mod health_test;
mod tree_test;
