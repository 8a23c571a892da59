pub mod dialog_demo;
