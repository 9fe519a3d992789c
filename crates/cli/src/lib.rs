//! JSON front end for the allocator: request/response mapping and the
//! `stockroute` subcommands.

pub mod commands;
pub mod dto;
pub mod io;
