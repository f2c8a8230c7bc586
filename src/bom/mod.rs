pub mod columns;
pub mod diff;
pub mod loader;
pub mod options;
pub mod report;
pub mod table;
