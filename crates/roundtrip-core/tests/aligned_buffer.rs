use roundtrip_core::buffer::AlignedBuffer;
use roundtrip_core::HarnessError;

#[test]
fn buffers_honour_requested_alignment() {
    for align in [8usize, 16, 32, 64, 128, 4096] {
        for size in [1usize, 7, 1000, 65_536 + 3] {
            let buf = AlignedBuffer::allocate(align, size).unwrap();
            assert_eq!(buf.as_ptr() as usize % align, 0, "align={align} size={size}");
            assert_eq!(buf.len(), size);
            assert_eq!(buf.alignment(), align);
        }
    }
}

#[test]
fn fresh_buffers_are_zeroed_and_writable() {
    let mut buf = AlignedBuffer::allocate(16, 257).unwrap();
    assert!(buf.as_slice().iter().all(|&b| b == 0));

    buf.as_mut_slice()[256] = 0xAB;
    assert_eq!(buf.as_slice()[256], 0xAB);
}

#[test]
fn zero_size_is_an_empty_aligned_buffer() {
    let buf = AlignedBuffer::allocate(64, 0).unwrap();
    assert!(buf.is_empty());
    assert!(buf.as_slice().is_empty());
    assert_eq!(buf.as_ptr() as usize % 64, 0);
}

#[test]
fn impossible_requests_are_allocation_errors() {
    match AlignedBuffer::allocate(16, usize::MAX) {
        Err(HarnessError::Allocation { size, alignment }) => {
            assert_eq!(size, usize::MAX);
            assert_eq!(alignment, 16);
        }
        other => panic!("expected allocation error, got {other:?}"),
    }

    // Non power-of-two alignment cannot form a layout.
    assert!(matches!(
        AlignedBuffer::allocate(12, 64),
        Err(HarnessError::Allocation { .. })
    ));
}
