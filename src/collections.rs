pub use self::value_set::ValueSet;

mod value_set;
