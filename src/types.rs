///Each indexed word is identified by its position in the dictionary, which is
///stable for the lifetime of the index
pub type DictIndex = u32;

pub type CharIndexType = u16;

pub type GroupIndexType = u8;

///The signature hash: a bitmask where each bit flags the presence/absence of a
///certain character group in the word (the order of the bits is defined by the
///group map)
pub type Signature = u32;

///Assigns a hash group to every alphabet position, indices correspond to the
///character indices of the alphabet the map was derived from
pub type GroupMap = Vec<GroupIndexType>;

///Signature width in bits used when none is given explicitly
pub const DEFAULT_HASH_SIZE: u8 = 16;

///Upper bound on the signature width, [`Signature`] is 32 bits wide
pub const MAX_HASH_SIZE: u8 = 32;
