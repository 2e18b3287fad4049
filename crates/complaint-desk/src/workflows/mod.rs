pub mod report;
pub mod tabs;
