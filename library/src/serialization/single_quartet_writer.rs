use bytemuck::{Pod, bytes_of};
use crate::serialization::gpu_ready_serialization_buffer::{DEFAULT_PAD_VALUE, ELEMENTS_IN_QUARTET, QUARTET_ELEMENT_SIZE_BYTES, QUARTET_SIZE_BYTES};

/// Writes one 16-byte quartet; whatever is left unwritten is padded on drop.
pub(crate) struct SingleQuartetWriter<'a> {
    storage: &'a mut Vec<u8>,
    write_pointer: usize,
    elements_written: usize,
}

impl Drop for SingleQuartetWriter<'_> {
    fn drop(&mut self) {
        while self.elements_written < ELEMENTS_IN_QUARTET {
            self.write_float_32(DEFAULT_PAD_VALUE);
        }
    }
}

impl<'a> SingleQuartetWriter<'a> {
    #[must_use]
    pub(super) fn new(storage: &'a mut Vec<u8>, write_pointer: usize) -> Self {
        assert!(write_pointer + QUARTET_SIZE_BYTES <= storage.len(), "buffer overflow");
        Self {
            storage,
            write_pointer,
            elements_written: 0,
        }
    }

    fn write_element<Element: Pod>(&mut self, value: Element) -> &mut Self {
        assert!(self.elements_written < ELEMENTS_IN_QUARTET, "quartet overflow");
        self.storage[self.write_pointer..self.write_pointer + QUARTET_ELEMENT_SIZE_BYTES].copy_from_slice(bytes_of(&value));
        self.elements_written += 1;
        self.write_pointer += QUARTET_ELEMENT_SIZE_BYTES;
        self
    }

    pub(crate) fn write_unsigned(&mut self, value: u32) -> &mut Self {
        self.write_element(value)
    }

    pub(crate) fn write_float_32(&mut self, value: f32) -> &mut Self {
        self.write_element(value)
    }

    pub(crate) fn write_float_64(&mut self, value: f64) -> &mut Self {
        self.write_float_32(value as f32)
    }

    pub(crate) fn write_vector(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.write_float_64(x).write_float_64(y).write_float_64(z)
    }
}
