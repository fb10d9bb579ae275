use crate::serialization::gpu_ready_serialization_buffer::{DEFAULT_PAD_VALUE, GpuReadySerializationBuffer};

/// A record with a fixed quartet footprint in a backend storage buffer.
pub(crate) trait SerializableForGpu {
    const SERIALIZED_QUARTET_COUNT: usize;

    fn serialize_into(&self, container: &mut GpuReadySerializationBuffer);
}

/// Packs records back to back. An empty batch still yields one pad-filled record: the backend
/// cannot bind a zero-sized storage buffer.
#[must_use]
pub(crate) fn serialize_batch<T: SerializableForGpu>(records: &[T]) -> GpuReadySerializationBuffer {
    if records.is_empty() {
        return GpuReadySerializationBuffer::make_filled(1, T::SERIALIZED_QUARTET_COUNT, DEFAULT_PAD_VALUE);
    }

    let mut result = GpuReadySerializationBuffer::new(records.len(), T::SERIALIZED_QUARTET_COUNT);
    for record in records {
        record.serialize_into(&mut result);
    }
    debug_assert!(result.fully_written());
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytemuck::cast_slice;

    struct Pair(f32, f32);

    impl SerializableForGpu for Pair {
        const SERIALIZED_QUARTET_COUNT: usize = 1;

        fn serialize_into(&self, container: &mut GpuReadySerializationBuffer) {
            container.write_quartet(|writer| {
                writer.write_float_32(self.0).write_float_32(self.1);
            });
        }
    }

    #[test]
    fn test_serialize_batch() {
        let actual = serialize_batch(&[Pair(1.0, 2.0), Pair(3.0, 4.0)]);

        let expected: Vec<f32> = vec![
            1.0, 2.0, DEFAULT_PAD_VALUE, DEFAULT_PAD_VALUE,
            3.0, 4.0, DEFAULT_PAD_VALUE, DEFAULT_PAD_VALUE,
        ];
        assert_eq!(actual.backend(), cast_slice::<f32, u8>(&expected));
    }

    #[test]
    fn test_serialize_empty_batch() {
        let actual = serialize_batch::<Pair>(&[]);

        assert_eq!(actual.total_slots_count(), 1);
        assert_eq!(actual.backend(), cast_slice::<f32, u8>(&[DEFAULT_PAD_VALUE; 4]));
    }
}
