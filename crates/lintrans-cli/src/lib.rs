//! Library half of the `lintrans` command-line tool: the walkthrough runner
//! and small argument/file helpers, kept here so they can be tested.
pub mod demo;
pub mod util;
