pub mod item_queue;

pub use item_queue::ItemQueue;
