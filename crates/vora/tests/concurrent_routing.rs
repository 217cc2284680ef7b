mod common;

use common::{no_options, sample_router};
use std::sync::Arc;
use std::thread;

#[test]
fn test_shared_router_across_threads() {
    let router = Arc::new(sample_router());
    let expected = router.route("Refactor auth", "Migrate the database", &no_options());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let router = Arc::clone(&router);
            thread::spawn(move || {
                router.route("Refactor auth", "Migrate the database", &no_options())
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
