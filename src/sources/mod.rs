pub mod supabase;
pub mod traits;

pub use supabase::SupabaseListings;
pub use traits::ListingSource;
