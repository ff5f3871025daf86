mod common;
mod pages;
mod service;
