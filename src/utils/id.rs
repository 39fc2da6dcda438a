// Record id generation

use rand::Rng;

/// Length of generated post ids
pub const POST_ID_LENGTH: usize = 20;

/// Random numeric id, e.g. `48105729375610294857`
pub fn generate_post_id() -> String {
    let mut rng = rand::thread_rng();
    (0..POST_ID_LENGTH)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}
