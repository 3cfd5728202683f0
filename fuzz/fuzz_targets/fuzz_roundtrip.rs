#![no_main]
use libfuzzer_sys::fuzz_target;
use zenplanar::*;

fuzz_target!(|data: &[u8]| {
    // Byte 0: width-1, byte 1: height-1, byte 2: format bits, rest: pixels
    if data.len() < 3 {
        return;
    }
    let width = (data[0] & 0x1F) as u32 + 1;
    let height = (data[1] & 0x1F) as u32 + 1;
    let count = (data[2] & 0x03) + 1;
    let alpha = match (data[2] >> 2) & 0x03 {
        0 => AlphaPosition::None,
        1 => AlphaPosition::First,
        _ => AlphaPosition::Last,
    };
    let order = if data[2] & 0x10 != 0 {
        ByteOrder::Little
    } else {
        ByteOrder::Big
    };
    let format = PixelFormat::interleaved8(count, order, alpha);
    if format.validate().is_err() {
        return;
    }

    let row_stride = width as usize * count as usize;
    let needed = row_stride * height as usize;
    let Some(pixels) = data[3..].get(..needed) else {
        return;
    };

    // Splitting and reassembling must reproduce the input byte for byte
    let planes = deinterleave(pixels, width, height, row_stride, &format, enough::Unstoppable)
        .expect("deinterleave valid input");
    let out = interleave(&planes, &format, enough::Unstoppable).expect("interleave planes");
    assert_eq!(out, pixels, "roundtrip pixel mismatch");

    // Alpha bytes must survive the full transform pipeline unchanged
    let output = TransformRequest::quantize(75)
        .run(pixels, width, height, row_stride, &format, enough::Unstoppable)
        .expect("transform valid input");
    if let Some(alpha_index) = format.alpha_plane_index() {
        for (group_in, group_out) in pixels
            .chunks(count as usize)
            .zip(output.pixels().chunks(count as usize))
        {
            assert_eq!(group_in[alpha_index], group_out[alpha_index], "alpha byte changed");
        }
    }
});
