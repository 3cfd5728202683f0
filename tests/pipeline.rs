//! Full-pipeline behavior: alpha preservation, quantization, validation,
//! and limits.

use enough::Unstoppable;
use zenplanar::*;

/// 2x1 RGBA image: alpha last, little-endian group, so alpha occupies
/// plane 0 in memory order.
fn sample_format() -> PixelFormat {
    PixelFormat::rgba8(ByteOrder::Little)
}

const SAMPLE_PIXELS: [u8; 8] = [10, 80, 160, 255, 5, 76, 151, 0];

#[test]
fn quantize_preserves_alpha_and_maps_color() {
    let format = sample_format();
    assert_eq!(format.alpha_plane_index(), Some(0));

    let output = TransformRequest::quantize(75)
        .run(&SAMPLE_PIXELS, 2, 1, 8, &format, Unstoppable)
        .unwrap();

    // Alpha bytes (offset 0 of each group) are untouched
    assert_eq!(output.pixels()[0], 10);
    assert_eq!(output.pixels()[4], 5);
    // Color channels snap to multiples of 75
    assert_eq!(output.pixels(), &[10, 75, 150, 225, 5, 75, 150, 0]);
}

#[test]
fn alpha_preserved_for_every_position_and_order() {
    let table = LookupTable::quantize(75);
    let pixels = SAMPLE_PIXELS;
    let combos = [
        (AlphaPosition::First, ByteOrder::Big, 0),
        (AlphaPosition::First, ByteOrder::Little, 3),
        (AlphaPosition::Last, ByteOrder::Big, 3),
        (AlphaPosition::Last, ByteOrder::Little, 0),
    ];
    for (alpha, order, alpha_index) in combos {
        let format = PixelFormat::interleaved8(4, order, alpha);
        assert_eq!(format.alpha_plane_index(), Some(alpha_index));

        let output = TransformRequest::with_table(table)
            .run(&pixels, 2, 1, 8, &format, Unstoppable)
            .unwrap();

        for (pixel_in, pixel_out) in pixels.chunks(4).zip(output.pixels().chunks(4)) {
            for i in 0..4 {
                let expected = if i == alpha_index {
                    pixel_in[i]
                } else {
                    table.get(pixel_in[i])
                };
                assert_eq!(
                    pixel_out[i], expected,
                    "alpha {alpha:?}, order {order:?}, byte {i}"
                );
            }
        }
    }
}

#[test]
fn no_alpha_format_transforms_every_byte() {
    let format = PixelFormat::interleaved8(4, ByteOrder::Little, AlphaPosition::None);
    assert_eq!(format.alpha_plane_index(), None);

    let table = LookupTable::quantize(75);
    let output = TransformRequest::with_table(table)
        .run(&SAMPLE_PIXELS, 2, 1, 8, &format, Unstoppable)
        .unwrap();

    let expected: Vec<u8> = SAMPLE_PIXELS.iter().map(|&b| table.get(b)).collect();
    assert_eq!(output.pixels(), &expected[..]);
}

#[test]
fn premultiplied_flag_does_not_change_processing() {
    let mut format = sample_format();
    let plain = TransformRequest::quantize(75)
        .run(&SAMPLE_PIXELS, 2, 1, 8, &format, Unstoppable)
        .unwrap();
    format.premultiplied = true;
    let premultiplied = TransformRequest::quantize(75)
        .run(&SAMPLE_PIXELS, 2, 1, 8, &format, Unstoppable)
        .unwrap();
    assert_eq!(plain.pixels(), premultiplied.pixels());
}

#[test]
fn padded_source_stride() {
    let format = sample_format();
    // Same 2x1 image with 3 bytes of row padding
    let mut pixels = SAMPLE_PIXELS.to_vec();
    pixels.extend_from_slice(&[0xAA, 0xBB, 0xCC]);

    let output = TransformRequest::quantize(75)
        .run(&pixels, 2, 1, 8, &format, Unstoppable)
        .unwrap();
    assert_eq!(output.pixels(), &[10, 75, 150, 225, 5, 75, 150, 0]);
    assert_eq!(output.row_stride, 8);
}

#[test]
fn rejects_invalid_format() {
    let mut format = sample_format();
    format.bits_per_pixel = 24;
    assert!(matches!(
        TransformRequest::quantize(75).run(&SAMPLE_PIXELS, 2, 1, 8, &format, Unstoppable),
        Err(PlanarError::InvalidFormat(_))
    ));
}

#[test]
fn rejects_zero_dimensions() {
    assert!(matches!(
        TransformRequest::quantize(75).run(&SAMPLE_PIXELS, 0, 1, 8, &sample_format(), Unstoppable),
        Err(PlanarError::ZeroDimensions { .. })
    ));
}

#[test]
fn rejects_undersized_source() {
    assert!(matches!(
        TransformRequest::quantize(75).run(&SAMPLE_PIXELS, 2, 2, 8, &sample_format(), Unstoppable),
        Err(PlanarError::BufferTooSmall { .. })
    ));
}

#[test]
fn mismatched_planes_fail_interleave() {
    let planes = vec![
        PlaneBuffer::new(2, 1).unwrap(),
        PlaneBuffer::new(2, 1).unwrap(),
        PlaneBuffer::new(2, 2).unwrap(),
        PlaneBuffer::new(2, 1).unwrap(),
    ];
    assert!(matches!(
        interleave(&planes, &sample_format(), Unstoppable),
        Err(PlanarError::PlaneSizeMismatch { index: 2, .. })
    ));
}

#[test]
fn limits_reject_oversized_images() {
    let limits = Limits {
        max_pixels: Some(1),
        ..Limits::default()
    };
    assert!(matches!(
        TransformRequest::quantize(75)
            .limits(limits)
            .run(&SAMPLE_PIXELS, 2, 1, 8, &sample_format(), Unstoppable),
        Err(PlanarError::LimitExceeded(_))
    ));
}

#[test]
fn limits_allow_small_images() {
    let limits = Limits {
        max_width: Some(16),
        max_height: Some(16),
        max_pixels: Some(256),
        max_memory_bytes: Some(4096),
    };
    TransformRequest::quantize(75)
        .limits(limits)
        .run(&SAMPLE_PIXELS, 2, 1, 8, &sample_format(), Unstoppable)
        .unwrap();
}

#[cfg(feature = "rgb")]
#[test]
fn typed_view_of_output() {
    let output = TransformRequest::quantize(75)
        .run(&SAMPLE_PIXELS, 2, 1, 8, &sample_format(), Unstoppable)
        .unwrap();
    let pixels: &[rgb::RGBA8] = output.as_pixels().unwrap();
    assert_eq!(pixels.len(), 2);
    assert_eq!(pixels[0], rgb::RGBA8::new(10, 75, 150, 225));

    // A 3-byte pixel type doesn't match a 4-byte format
    let err: Result<&[rgb::RGB8], _> = output.as_pixels();
    assert!(matches!(err, Err(PlanarError::InvalidFormat(_))));
}

#[cfg(feature = "imgref")]
#[test]
fn imgref_view_of_output() {
    let output = TransformRequest::quantize(75)
        .run(&SAMPLE_PIXELS, 2, 1, 8, &sample_format(), Unstoppable)
        .unwrap();
    let img = output.as_imgref::<rgb::RGBA8>().unwrap();
    assert_eq!((img.width(), img.height()), (2, 1));
    let row: &[rgb::RGBA8] = img.rows().next().unwrap();
    assert_eq!(row[1], rgb::RGBA8::new(5, 75, 150, 0));
}
