pub mod adjacency_list;
pub mod cursor;

pub use adjacency_list::AdjacencyList;
pub use cursor::{AdjacencyCursor, Cursor, EdgeCursor, VertexCursor, Walk};
