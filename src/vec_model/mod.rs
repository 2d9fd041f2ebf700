use crate::vec_error::VecError;

mod coords;
mod ops;
mod sanitize;
mod segment;
mod vector;

pub use self::coords::*;
pub use self::sanitize::*;
pub use self::vector::*;

#[cfg(test)]
mod test_vec_model {
    use super::*;

    #[test]
    fn test_construct_round_trip() {
        let from_pair = Vector::new(1.5, -2.5).unwrap();
        let from_slice = Vector::from_slice(&[1.5, -2.5]).unwrap();
        let from_coords = Vector::from_coords(Coords::new(1.5, -2.5)).unwrap();
        assert!(from_pair.equals(&from_slice));
        assert!(from_slice.equals(&from_coords));
    }

    #[test]
    fn test_construct_deterministic() {
        let a = Vector::new(0.123456789, 9.87654321).unwrap();
        let b = Vector::new(0.123456789, 9.87654321).unwrap();
        assert!(a.equals(&b));
        assert_eq!(a.x(), b.x());
        assert_eq!(a.y(), b.y());
    }

    #[test]
    fn test_copy_keeps_value() {
        let v = Vector::new(3.25, -7.75).unwrap();
        let dup = v;
        assert!(dup.equals(&v));
        assert!(v.clone().equals(&dup));
    }

    #[test]
    fn test_operations_return_new_values() {
        let v = Vector::new(1.0, 2.0).unwrap();
        let moved = v.add(&Vector::new(3.0, 4.0).unwrap()).unwrap();
        // the input is untouched
        assert!(v.equals(&Vector::new(1.0, 2.0).unwrap()));
        assert!(moved.equals(&Vector::new(4.0, 6.0).unwrap()));
    }
}
