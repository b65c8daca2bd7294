//! Add-to-cart gating and collaborator dispatch.

use crate::cart::{CartRequest, CartService, WishlistService};
use crate::catalog::{Product, StockModel};
use crate::error::{ActionError, SelectionError};
use crate::selection::Selection;

/// Validates the current selection and builds the request to forward.
///
/// Multi-variant products need every offered axis chosen, a matching
/// variant, and enough variant stock. Simple products only check stock.
pub fn prepare_add_to_cart(
    product: &Product,
    selection: &Selection,
) -> Result<CartRequest, SelectionError> {
    let resolution = selection.resolve(product);
    let quantity = selection.quantity;

    match product.stock_model {
        StockModel::MultiVariant => {
            let size = selection.size.clone().filter(|s| !s.is_empty());
            let color = selection.color.clone().filter(|c| !c.is_empty());

            if resolution.options.has_size_axis() && size.is_none() {
                return Err(SelectionError::MissingSize);
            }
            if resolution.options.has_color_axis() && color.is_none() {
                return Err(SelectionError::MissingColor);
            }

            let variant = resolution
                .selected_variant
                .ok_or(SelectionError::VariantUnavailable)?;
            if variant.stock < quantity {
                return Err(SelectionError::InsufficientVariantStock {
                    available: variant.stock,
                });
            }

            Ok(CartRequest::Variant {
                product: product.clone(),
                variant: variant.clone(),
                quantity,
                size,
                color,
            })
        }
        StockModel::Simple { stock } => {
            if stock < quantity {
                return Err(SelectionError::InsufficientStock { available: stock });
            }
            Ok(CartRequest::Simple {
                product: product.clone(),
                quantity,
            })
        }
    }
}

/// Validates and forwards to the cart. Nothing is forwarded on rejection.
pub fn add_to_cart<C: CartService + ?Sized>(
    cart: &mut C,
    product: &Product,
    selection: &Selection,
) -> Result<CartRequest, ActionError> {
    let request = prepare_add_to_cart(product, selection)?;
    cart.add_to_cart(request.clone())?;
    Ok(request)
}

/// Forwards the product to the wishlist as-is.
pub fn add_to_wishlist<W: WishlistService + ?Sized>(
    wishlist: &mut W,
    product: &Product,
) -> Result<(), ActionError> {
    wishlist.add_to_wishlist(product)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::normalize_product;
    use crate::error::CommerceError;
    use serde_json::json;

    fn product(value: serde_json::Value) -> Product {
        normalize_product(serde_json::from_value(value).unwrap())
    }

    #[derive(Default)]
    struct RecordingCart {
        requests: Vec<CartRequest>,
        fail: bool,
    }

    impl CartService for RecordingCart {
        fn add_to_cart(&mut self, request: CartRequest) -> Result<(), CommerceError> {
            if self.fail {
                return Err(CommerceError::Unavailable("cart offline".to_string()));
            }
            self.requests.push(request);
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingWishlist {
        products: Vec<Product>,
    }

    impl WishlistService for RecordingWishlist {
        fn add_to_wishlist(&mut self, product: &Product) -> Result<(), CommerceError> {
            self.products.push(product.clone());
            Ok(())
        }
    }

    fn two_colors() -> Product {
        product(json!({
            "_id": "p1",
            "variantType": "MultiVarient",
            "variants": [
                {"size": "S", "color": "Red", "stock": 3},
                {"size": "S", "color": "Blue", "stock": 0}
            ]
        }))
    }

    #[test]
    fn test_variant_request_carries_selection() {
        let p = two_colors();
        let mut selection = Selection::for_product(&p);
        selection.quantity = 2;

        match prepare_add_to_cart(&p, &selection).unwrap() {
            CartRequest::Variant {
                variant,
                quantity,
                size,
                color,
                ..
            } => {
                assert_eq!(variant.stock, 3);
                assert_eq!(quantity, 2);
                assert_eq!(size.as_deref(), Some("S"));
                assert_eq!(color.as_deref(), Some("Red"));
            }
            other => panic!("expected variant request, got {other:?}"),
        }
    }

    #[test]
    fn test_out_of_stock_variant_rejected() {
        let p = two_colors();
        let mut selection = Selection::for_product(&p);
        selection.select_color("Blue");

        let mut cart = RecordingCart::default();
        let err = add_to_cart(&mut cart, &p, &selection).unwrap_err();
        assert!(matches!(
            err,
            ActionError::Rejected(SelectionError::InsufficientVariantStock { available: 0 })
        ));
        assert_eq!(err.to_string(), "Only 0 items available for this variant");
        assert!(cart.requests.is_empty());
    }

    #[test]
    fn test_missing_axis_choice() {
        let p = two_colors();
        let selection = Selection {
            size: Some("S".to_string()),
            ..Selection::default()
        };
        assert_eq!(
            prepare_add_to_cart(&p, &selection),
            Err(SelectionError::MissingColor)
        );

        let selection = Selection {
            color: Some("Red".to_string()),
            ..Selection::default()
        };
        assert_eq!(
            prepare_add_to_cart(&p, &selection),
            Err(SelectionError::MissingSize)
        );
    }

    #[test]
    fn test_unknown_combination_is_unavailable() {
        let p = two_colors();
        let selection = Selection {
            size: Some("XL".to_string()),
            color: Some("Red".to_string()),
            ..Selection::default()
        };
        assert_eq!(
            prepare_add_to_cart(&p, &selection),
            Err(SelectionError::VariantUnavailable)
        );
    }

    #[test]
    fn test_simple_stock_gate() {
        let p = product(json!({"_id": "p2", "stock": 2}));
        let mut selection = Selection::for_product(&p);
        selection.quantity = 3;
        assert_eq!(
            prepare_add_to_cart(&p, &selection),
            Err(SelectionError::InsufficientStock { available: 2 })
        );

        selection.quantity = 2;
        let mut cart = RecordingCart::default();
        let request = add_to_cart(&mut cart, &p, &selection).unwrap();
        assert_eq!(request.quantity(), 2);
        assert_eq!(cart.requests, vec![request]);
    }

    #[test]
    fn test_simple_product_with_zero_stock() {
        let p = product(json!({"stock": 0}));
        let selection = Selection::for_product(&p);
        assert_eq!(
            prepare_add_to_cart(&p, &selection),
            Err(SelectionError::InsufficientStock { available: 0 })
        );
    }

    #[test]
    fn test_collaborator_failure_surfaces() {
        let p = product(json!({"stock": 5}));
        let mut cart = RecordingCart {
            fail: true,
            ..RecordingCart::default()
        };
        let err = add_to_cart(&mut cart, &p, &Selection::default()).unwrap_err();
        assert!(matches!(err, ActionError::Collaborator(_)));
    }

    #[test]
    fn test_wishlist_forwards_without_validation() {
        let p = product(json!({"variantType": "MultiVarient", "variants": []}));
        let mut wishlist = RecordingWishlist::default();
        add_to_wishlist(&mut wishlist, &p).unwrap();
        assert_eq!(wishlist.products, vec![p]);
    }
}
