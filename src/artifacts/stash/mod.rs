pub mod stash_entry;
