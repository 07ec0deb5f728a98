#[cfg(test)]
mod tests {
    use crate::buffer::pool::{shared, BufferPool};
    use crate::config::PoolConfig;

    fn test_pool(max_pooled: usize, ceiling: u64) -> BufferPool {
        BufferPool::new(&PoolConfig {
            max_pooled: Some(max_pooled),
            capacity_ceiling_bytes: ceiling,
            default_path_capacity: 260,
        })
    }

    #[test]
    fn test_acquire_release_acquire_reuses_region() {
        let pool = test_pool(4, 65536);
        let buf = pool.acquire(100).unwrap();
        let cap = buf.char_capacity();
        pool.release(buf);
        assert_eq!(pool.pooled_count(), 1);

        let again = pool.acquire(100).unwrap();
        // Conservation: no fresh allocation, the same region comes back.
        assert_eq!(again.char_capacity(), cap);
        assert_eq!(pool.metrics().snapshot().fresh_allocations, 1);
        assert_eq!(pool.metrics().snapshot().reuses, 1);
    }

    #[test]
    fn test_release_respects_capacity_ceiling() {
        let pool = test_pool(4, 512);
        let buf = pool.acquire(10_000).unwrap();
        pool.release(buf);
        assert_eq!(pool.pooled_count(), 0);
        assert_eq!(pool.metrics().snapshot().releases_freed, 1);
    }

    #[test]
    fn test_release_respects_pool_maximum() {
        let pool = test_pool(2, 65536);
        let a = pool.acquire(10).unwrap();
        let b = pool.acquire(10).unwrap();
        let c = pool.acquire(10).unwrap();
        pool.release(a);
        pool.release(b);
        pool.release(c);
        assert_eq!(pool.pooled_count(), 2);
        let snap = pool.metrics().snapshot();
        assert_eq!(snap.releases_pooled, 2);
        assert_eq!(snap.releases_freed, 1);
    }

    #[test]
    fn test_pooled_buffer_grows_on_demand() {
        let pool = test_pool(4, 1 << 20);
        let buf = pool.acquire(10).unwrap();
        pool.release(buf);
        let big = pool.acquire(5_000).unwrap();
        assert!(big.char_capacity() >= 5_001);
        assert_eq!(pool.metrics().snapshot().fresh_allocations, 1);
    }

    #[test]
    fn test_released_buffer_length_is_reset() {
        let pool = test_pool(4, 65536);
        let mut buf = pool.acquire(10).unwrap();
        buf.fill_from_str("stale contents").unwrap();
        pool.release(buf);
        let again = pool.acquire(10).unwrap();
        assert_eq!(again.length(), 0);
        assert_eq!(again.to_string_lossy(), "");
    }

    #[test]
    fn test_drain_empties_pool() {
        let pool = test_pool(4, 65536);
        let buf = pool.acquire(10).unwrap();
        pool.release(buf);
        assert_eq!(pool.pooled_count(), 1);
        pool.drain();
        assert_eq!(pool.pooled_count(), 0);
    }

    #[test]
    fn test_shared_pool_is_a_singleton() {
        assert!(std::ptr::eq(shared(), shared()));
    }

    #[test]
    fn test_concurrent_acquire_release() {
        use std::sync::Arc;

        let pool = Arc::new(test_pool(8, 1 << 20));
        let mut handles = Vec::new();
        for _ in 0..8 {
            let pool = Arc::clone(&pool);
            handles.push(std::thread::spawn(move || {
                for _ in 0..200 {
                    let mut buf = pool.acquire(64).unwrap();
                    buf.fill_from_str("C:\\Temp\\x").unwrap();
                    pool.release(buf);
                }
            }));
        }
        for h in handles {
            h.join().unwrap();
        }
        let snap = pool.metrics().snapshot();
        assert_eq!(snap.acquires, 8 * 200);
        assert!(pool.pooled_count() <= 8);
    }
}
