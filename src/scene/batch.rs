use std::collections::HashMap;

use crate::gfx::{BufferId, Device, TextureId, Topology};

/// The (color, normal) texture pair identifying a batch's material. Equality
/// and hashing go over the two ids, so primitives sharing both textures land
/// in the same group no matter which material referenced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureBundle {
    pub color: TextureId,
    pub normal: TextureId,
}

/// One draw call's worth of geometry. Buffers belong exclusively to this
/// batch; textures are shared through the bundle key.
#[derive(Debug, Clone, Copy)]
pub struct Batch {
    pub topology: Topology,
    pub vertex_buffer: BufferId,
    pub index_buffer: BufferId,
    pub index_count: u32,
    pub index_offset: u32,
}

/// Everything the forward passes draw: batches grouped by texture bundle.
///
/// Built once at load time and never mutated afterwards, which keeps the
/// map's iteration order stable from pass to pass within a frame.
#[derive(Debug, Default)]
pub struct RenderBuffer {
    groups: HashMap<TextureBundle, Vec<Batch>>,
}

impl RenderBuffer {
    pub(crate) fn insert(&mut self, bundle: TextureBundle, batch: Batch) {
        self.groups.entry(bundle).or_default().push(batch);
    }

    /// Total number of batches across all bundles.
    pub fn batch_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Number of distinct texture bundles.
    pub fn bundle_count(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TextureBundle, &[Batch])> {
        self.groups
            .iter()
            .map(|(bundle, batches)| (bundle, batches.as_slice()))
    }

    /// Batches grouped under `bundle`, empty if the bundle is unknown.
    pub fn batches(&self, bundle: &TextureBundle) -> &[Batch] {
        self.groups.get(bundle).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The canonical geometry callback body: binds each bundle's textures at
    /// the given slots and issues one indexed draw per batch.
    pub fn draw_all<D: Device>(&self, device: &mut D, color_slot: u32, normal_slot: u32) {
        for (bundle, batches) in &self.groups {
            device.set_texture(color_slot, bundle.color);
            device.set_texture(normal_slot, bundle.normal);

            for batch in batches {
                device.set_topology(batch.topology);
                device.set_index_buffer(batch.index_buffer);
                device.set_vertex_buffer(batch.vertex_buffer);
                device.draw_indexed(batch.index_count, batch.index_offset);
            }
        }
    }
}
