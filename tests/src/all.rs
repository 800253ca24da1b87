mod common;
mod concurrency;
mod hash_test;
mod ring;
