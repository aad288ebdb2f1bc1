//! Manual accessor resolution.
//!
//! Batches are uploaded from the raw glTF buffer bytes, so accessors are
//! walked by hand (accessor -> buffer view -> buffer, honoring offsets and
//! byte stride) instead of going through a convenience reader. Everything is
//! bounds-checked once at resolve time; element reads after that cannot leave
//! the span.

use gltf::accessor::{DataType, Dimensions};

use super::error::SceneError;
use crate::gfx::IndexFormat;

/// A resolved accessor: raw bytes plus the stride to step one element.
pub(crate) struct AccessorSpan<'a> {
    data: &'a [u8],
    count: usize,
    stride: usize,
    element_size: usize,
}

impl<'a> AccessorSpan<'a> {
    /// Sparse accessors (no backing view) are not supported and resolve as
    /// malformed.
    pub(crate) fn resolve(
        accessor: &gltf::Accessor,
        buffers: &'a [gltf::buffer::Data],
    ) -> Result<Self, SceneError> {
        let view = accessor.view().ok_or_else(|| {
            SceneError::MalformedScene(format!(
                "accessor {} has no buffer view",
                accessor.index()
            ))
        })?;
        let buffer: &[u8] = buffers
            .get(view.buffer().index())
            .map(|data| &data.0[..])
            .ok_or_else(|| {
                SceneError::MalformedScene(format!(
                    "buffer view {} references buffer {} which is not loaded",
                    view.index(),
                    view.buffer().index()
                ))
            })?;

        let element_size = accessor.size();
        let stride = view.stride().unwrap_or(element_size);
        if stride < element_size {
            return Err(SceneError::MalformedScene(format!(
                "buffer view {} stride {} is smaller than element size {}",
                view.index(),
                stride,
                element_size
            )));
        }

        let count = accessor.count();
        let start = view.offset() + accessor.offset();
        let end = match count {
            0 => start,
            n => start + stride * (n - 1) + element_size,
        };
        let view_end = view.offset() + view.length();
        if end > view_end || view_end > buffer.len() {
            return Err(SceneError::MalformedScene(format!(
                "accessor {} spans bytes {}..{} outside its buffer view",
                accessor.index(),
                start,
                end
            )));
        }

        Ok(Self {
            data: &buffer[start..],
            count,
            stride,
            element_size,
        })
    }

    pub(crate) fn count(&self) -> usize {
        self.count
    }

    /// Bytes of element `i`; in range for every `i < count()` once resolve
    /// has succeeded.
    fn element(&self, i: usize) -> &'a [u8] {
        let begin = i * self.stride;
        &self.data[begin..begin + self.element_size]
    }

    pub(crate) fn f32x3(&self, i: usize) -> [f32; 3] {
        bytemuck::pod_read_unaligned(self.element(i))
    }

    pub(crate) fn f32x2(&self, i: usize) -> [f32; 2] {
        bytemuck::pod_read_unaligned(self.element(i))
    }

    /// The whole span as contiguous bytes. Only valid for tightly packed
    /// accessors; index data is required to be packed before upload.
    pub(crate) fn packed_bytes(&self) -> Option<&'a [u8]> {
        (self.stride == self.element_size).then(|| &self.data[..self.count * self.element_size])
    }
}

/// Maps the accessor's component type to an index width, rejecting everything
/// other than u16 and u32.
pub(crate) fn index_format(accessor: &gltf::Accessor) -> Result<IndexFormat, SceneError> {
    match accessor.data_type() {
        DataType::U16 => Ok(IndexFormat::Uint16),
        DataType::U32 => Ok(IndexFormat::Uint32),
        other => Err(SceneError::UnsupportedIndexWidth(other)),
    }
}

pub(crate) fn require_format(
    accessor: &gltf::Accessor,
    data_type: DataType,
    dimensions: Dimensions,
    what: &str,
) -> Result<(), SceneError> {
    if accessor.data_type() != data_type || accessor.dimensions() != dimensions {
        return Err(SceneError::MalformedScene(format!(
            "{} accessor {} must be {:?} {:?}, found {:?} {:?}",
            what,
            accessor.index(),
            data_type,
            dimensions,
            accessor.data_type(),
            accessor.dimensions()
        )));
    }
    Ok(())
}
