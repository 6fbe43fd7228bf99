use amqp_codec::{
    buffer::Change,
    format_code::{EncodingCodes, Kind},
    types::*,
};
use bytes::BytesMut;

/// An open frame body: a list holding a container id, a hostname and a max frame size
fn write_open(buffer: &mut [u8]) -> usize {
    let mut list = ListType::wrap(&mut buffer[..], 0);
    list.max_count(3).unwrap().clear().unwrap();
    let mut index = list.body_offset().unwrap();

    let mut container_id = StringType::wrap(&mut buffer[..], index);
    container_id.set("container-1").unwrap();
    index = container_id.limit().unwrap();

    let mut hostname = StringType::wrap(&mut buffer[..], index);
    hostname.set("localhost").unwrap();
    index = hostname.limit().unwrap();

    let mut max_frame_size = UIntType::wrap(&mut buffer[..], index);
    max_frame_size.set(0x10000).unwrap();
    index = max_frame_size.limit().unwrap();

    let mut list = ListType::wrap(&mut buffer[..], 0);
    list.set_limit(3, index).unwrap();
    index
}

#[test]
fn list_of_mixed_elements() {
    let mut buffer = BytesMut::zeroed(64);
    let limit = write_open(&mut buffer[..]);

    let list = ListType::wrap(&buffer[..], 0);
    assert_eq!(list.count(), Ok(3));
    assert_eq!(list.limit(), Ok(limit));

    let elements: Vec<_> = list.iter().unwrap().map(Result::unwrap).collect();
    assert_eq!(elements.len(), 3);
    assert_eq!(
        StringType::wrap(&buffer[..], elements[0].offset()).get(),
        Ok("container-1")
    );
    assert_eq!(
        StringType::wrap(&buffer[..], elements[1].offset()).get(),
        Ok("localhost")
    );
    assert_eq!(
        UIntType::wrap(&buffer[..], elements[2].offset()).get(),
        Ok(0x10000)
    );
}

#[test]
fn views_over_owned_buffers() {
    let mut list = ListType::wrap(BytesMut::zeroed(16), 4);
    list.max_length(0).unwrap().clear().unwrap();
    assert_eq!(list.limit(), Ok(7));

    let buffer = list.into_inner();
    assert_eq!(&buffer[4..7], &[0xc0, 0x01, 0x00]);

    let mut list = ListType::wrap(vec![0u8; 16], 0);
    list.max_length(0x100).unwrap().clear().unwrap();
    assert_eq!(list.buffer()[0], 0xd0);
}

#[test]
fn nested_list_is_skipped_as_one_element() {
    let mut buffer = [0u8; 32];
    let mut outer = ListType::wrap(&mut buffer[..], 0);
    outer.max_length(0).unwrap().clear().unwrap();
    let inner_offset = outer.body_offset().unwrap();

    let mut inner = ListType::wrap(&mut buffer[..], inner_offset);
    inner.max_length(0).unwrap().clear().unwrap();
    let inner_body = inner.body_offset().unwrap();
    let mut element = BooleanType::wrap(&mut buffer[..], inner_body);
    element.set(true).unwrap();
    let inner_limit = element.limit().unwrap();
    let mut inner = ListType::wrap(&mut buffer[..], inner_offset);
    inner.set_limit(1, inner_limit).unwrap();

    let mut trailing = ULongType::wrap(&mut buffer[..], inner_limit);
    trailing.set(7).unwrap();
    let limit = trailing.limit().unwrap();

    let mut outer = ListType::wrap(&mut buffer[..], 0);
    outer.set_limit(2, limit).unwrap();

    let outer = ListType::wrap(&buffer[..], 0);
    let kinds: Vec<_> = outer
        .iter()
        .unwrap()
        .map(|element| element.unwrap().kind().unwrap())
        .collect();
    assert_eq!(kinds, vec![Kind::List, Kind::ULong]);
}

#[test]
fn map_of_symbols() {
    let mut buffer = [0u8; 64];
    let mut map = MapType::wrap(&mut buffer[..], 0);
    map.max_count(4).unwrap().clear().unwrap();
    let mut index = map.body_offset().unwrap();

    for (key, value) in [("product", "amqp"), ("version", "1.0")] {
        let mut k = SymbolType::wrap(&mut buffer[..], index);
        k.set(key).unwrap();
        index = k.limit().unwrap();
        let mut v = StringType::wrap(&mut buffer[..], index);
        v.set(value).unwrap();
        index = v.limit().unwrap();
    }

    let mut map = MapType::wrap(&mut buffer[..], 0);
    map.set_limit(4, index).unwrap();

    let map = MapType::wrap(&buffer[..], 0);
    let entries: Vec<_> = map
        .iter()
        .unwrap()
        .map(|pair| {
            let (key, value) = pair.unwrap();
            let key = SymbolType::wrap(&buffer[..], key.offset())
                .get()
                .unwrap()
                .to_owned();
            let value = StringType::wrap(&buffer[..], value.offset())
                .get()
                .unwrap()
                .to_owned();
            (key, value)
        })
        .collect();
    assert_eq!(
        entries,
        vec![
            ("product".to_owned(), "amqp".to_owned()),
            ("version".to_owned(), "1.0".to_owned())
        ]
    );
}

#[test]
fn array_of_uints() {
    let mut buffer = [0u8; 64];
    let mut array = ArrayType::wrap(&mut buffer[..], 0);
    array.max_count(3).unwrap();
    array.set_element_kind(EncodingCodes::Uint).unwrap();
    let mut index = array.body_offset().unwrap() + 1;

    for value in [1u32, 2, 3] {
        buffer[index..index + 4].copy_from_slice(&value.to_be_bytes());
        index += 4;
    }

    let mut array = ArrayType::wrap(&mut buffer[..], 0);
    array.set_limit(3, index).unwrap();
    assert_eq!(array.limit(), Ok(index));

    let array = ArrayType::wrap(&buffer[..], 0);
    assert_eq!(array.element_kind(), Ok(Kind::UInt));
    let values: Vec<u32> = array
        .iter()
        .unwrap()
        .map(|payload| {
            let mut bytes = [0u8; 4];
            bytes.copy_from_slice(payload.unwrap());
            u32::from_be_bytes(bytes)
        })
        .collect();
    assert_eq!(values, vec![1, 2, 3]);
}

#[test]
fn copy_between_buffers_notifies_once() {
    let mut source = [0u8; 32];
    write_open(&mut source[..]);
    let other = ListType::wrap(&source[..], 0);

    let mut changes = Vec::new();
    let mut buffer = [0u8; 48];
    let mut list =
        ListType::wrap(&mut buffer[..], 8).watch(|change: Change| changes.push(change));
    list.set(&other).unwrap();
    let limit = list.limit().unwrap();
    drop(list);

    assert_eq!(limit, 8 + other.limit().unwrap());
    assert_eq!(
        changes,
        vec![Change {
            kind: Kind::List,
            offset: 8
        }]
    );
}
