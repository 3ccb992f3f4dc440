// main.rs
//
// Copyright (c) 2025 RoscoeEH
//
// This source code is licensed under the MIT License.
// See the LICENSE file in the project root for full license information.
//
// Author: RoscoeEH
//
// Description:
// Entry point of the application. Parses the command line, dispatches to the
// matching operation, prints the result line, and maps errors to a non-zero
// exit.

use std::process::exit;

pub mod asymmetric_crypto;
pub mod cli;
pub mod codec;
pub mod error;
pub mod key_loading;
pub mod operations;

use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Encrypt(args) => operations::encrypt_op(args),
        Command::Decrypt(args) => operations::decrypt_op(args),
        Command::Sign(args) => operations::sign_op(args),
        Command::Verify(args) => operations::verify_op(args),
    };

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("{}", e);
            exit(1);
        }
    }
}
