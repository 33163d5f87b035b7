pub mod flashcards;
pub mod progress;
pub mod quiz;
pub mod reading;
pub mod syllabus;
pub mod timer;
pub mod writing;
