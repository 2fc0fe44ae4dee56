use std::sync::{ Arc, Mutex, MutexGuard, PoisonError };



/// A hand-off slot shared between collaborators.
///
/// One collaborator publishes a value during its `init`, a later one reads or takes it.
/// Cloning the handle yields another reference to the same slot.
pub struct Shared<T>( Arc<Mutex<Option<T>>> );

impl<T> Shared<T> {

    pub fn new() -> Self { Self( Arc::new( Mutex::new( None )))}

    /// Stores `value`, returning whatever was published before.
    pub fn publish( &self, value: T ) -> Option<T> { self.lock().replace( value )}

    /// Removes and returns the published value.
    pub fn take( &self ) -> Option<T> { self.lock().take() }

    pub fn is_published( &self ) -> bool { self.lock().is_some() }

    // A panic while holding the lock cannot leave the `Option` half-written.
    fn lock( &self ) -> MutexGuard<'_, Option<T>> {
        self.0.lock().unwrap_or_else( PoisonError::into_inner )
    }

}

impl<T: Clone> Shared<T> {
    /// Returns a copy of the published value without removing it.
    pub fn get( &self ) -> Option<T> { self.lock().clone() }
}

impl<T> Clone for Shared<T> {
    fn clone( &self ) -> Self { Self( Arc::clone( &self.0 ))}
}

impl<T> Default for Shared<T> {
    fn default() -> Self { Self::new() }
}

impl<T> std::fmt::Debug for Shared<T> {
    fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
        f.debug_struct( "Shared" )
            .field( "published", &self.is_published() )
            .finish_non_exhaustive()
    }
}

#[cfg( test )]
mod tests {

    use super::Shared ;

    #[test]
    fn clones_share_the_slot() {
        let slot = Shared::new();
        let handle = slot.clone();
        assert!( !handle.is_published() );
        assert_eq!( slot.publish( 1 ), None );
        assert_eq!( handle.get(), Some( 1 ));
        assert_eq!( handle.publish( 2 ), Some( 1 ));
        assert_eq!( slot.take(), Some( 2 ));
        assert!( !handle.is_published() );
    }

    #[test]
    fn survives_poisoning() {
        let slot = Shared::new();
        slot.publish( "value" );
        let handle = slot.clone();
        let _ = std::thread::spawn( move || {
            let _guard = handle.0.lock().unwrap();
            panic!( "poison" );
        }).join();
        assert_eq!( slot.get(), Some( "value" ));
    }

}
