//! Task id generation: `t{unix_millis}-{9 base36 chars}`.

use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

const RANDOM_SUFFIX_LEN: usize = 9;
const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates a board-unique task id.
///
/// The time part keeps ids roughly ordered; the random part (from a v4 UUID)
/// separates ids created within the same millisecond.
pub fn generate_task_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis());
    format!("t{millis}-{}", random_suffix(Uuid::new_v4().as_u128()))
}

fn random_suffix(mut entropy: u128) -> String {
    let mut suffix = String::with_capacity(RANDOM_SUFFIX_LEN);
    for _ in 0..RANDOM_SUFFIX_LEN {
        suffix.push(char::from(BASE36_DIGITS[(entropy % 36) as usize]));
        entropy /= 36;
    }
    suffix
}
