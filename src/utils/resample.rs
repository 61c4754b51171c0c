use rayon::prelude::*;

/// Nearest-neighbour upscale of a single-channel image by an integer factor
///
/// Every source pixel becomes a `factor x factor` block, so the output is
/// `(width * factor) x (height * factor)`. Rows are filled in parallel: each
/// source row is expanded once and then copied into the remaining
/// `factor - 1` output rows of its band.
pub fn upscale_nearest(gray: &[u8], width: usize, height: usize, factor: usize) -> Vec<u8> {
    let out_w = width * factor;
    let mut out = vec![0u8; out_w * height * factor];
    if out.is_empty() {
        return out;
    }

    out.par_chunks_mut(out_w * factor)
        .zip(gray.par_chunks(width))
        .for_each(|(band, src)| {
            let (first, rest) = band.split_at_mut(out_w);
            for (block, &v) in first.chunks_exact_mut(factor).zip(src) {
                block.fill(v);
            }
            for row in rest.chunks_exact_mut(out_w) {
                row.copy_from_slice(first);
            }
        });

    out
}
