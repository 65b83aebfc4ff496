pub mod head_bob;
