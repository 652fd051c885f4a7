use vis4earth_volume_common::{AxisSpec, Dimension};

/// Copies every `W`-byte voxel of `input` to its reoriented position in `output`.
///
/// Walks the source in storage order and keeps a running destination offset per
/// source axis, so each voxel costs one add and one copy.
///
/// # Requirements
///
/// `input.len()` and `output.len()` must both equal `dimension.voxel_count() * W`.
pub(crate) fn scatter_voxels<const W: usize>(
    input: &[u8],
    output: &mut [u8],
    dimension: Dimension,
    axis: AxisSpec,
) {
    debug_assert_eq!(input.len(), dimension.voxel_count() * W);
    debug_assert_eq!(output.len(), input.len());

    let dest = dimension.permuted(axis);
    let dest_strides = [1isize, dest.x() as isize, dest.slice_len() as isize];

    // Destination offset (in voxels) contributed by each source axis.
    let mut origin = 0isize;
    let mut step = [0isize; 3];
    for dest_axis in 0..3 {
        let src_axis = axis.source_axis(dest_axis);
        let stride = dest_strides[dest_axis];
        if axis.is_flipped(dest_axis) {
            origin += (dest.get(dest_axis) as isize - 1) * stride;
            step[src_axis] = -stride;
        } else {
            step[src_axis] = stride;
        }
    }

    let mut src = input.chunks_exact(W);
    let mut z_ofs = origin;
    for _ in 0..dimension.z() {
        let mut y_ofs = z_ofs;
        for _ in 0..dimension.y() {
            let mut x_ofs = y_ofs;
            for voxel in src.by_ref().take(dimension.x()) {
                let dst = x_ofs as usize * W;
                output[dst..dst + W].copy_from_slice(voxel);
                x_ofs += step[0];
            }
            y_ofs += step[1];
        }
        z_ofs += step[2];
    }
}
