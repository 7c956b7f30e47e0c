#![no_main]
use libfuzzer_sys::fuzz_target;
use pagebuf_core::Allocator;

// Interpret the input as a sequence of alloc/free/resize operations and
// check that the accounting counters drain back to zero.
fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }

    let mut alloc = Allocator::default();
    let mut live = Vec::new();

    for chunk in data.chunks(4) {
        if chunk.len() < 4 {
            break;
        }
        let op = chunk[0] % 3;
        let size = u16::from_le_bytes([chunk[1], chunk[2]]) as usize;

        match op {
            0 => {
                if let Ok(r) = alloc.alloc(size.max(1).min(2 * 65536)) {
                    live.push(r);
                }
            }
            1 => {
                if let Some(r) = live.pop() {
                    // SAFETY: r is live and freed exactly once.
                    let _ = unsafe { alloc.free(r) };
                }
            }
            _ => {
                if let Some(r) = live.pop() {
                    // SAFETY: r is live and replaced by the result.
                    match unsafe { alloc.resize(r, size) } {
                        Ok(n) if !n.is_empty() => live.push(n),
                        Ok(_) => {}
                        // The old region stays live when the move fails.
                        Err(_) => live.push(r),
                    }
                }
            }
        }
    }

    for r in live.drain(..) {
        // SAFETY: each live region is freed exactly once.
        let _ = unsafe { alloc.free(r) };
    }
    assert_eq!(alloc.live_allocs(), 0);
    assert_eq!(alloc.mapping_count(), 0);
    assert_eq!(alloc.mapped_bytes(), 0);
});
