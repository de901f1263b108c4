use codebook_domain::{
    Color, ConfigFlags, DomainError, Enumeration, FlagSet, HttpMethod, Permission, Priority, Status,
};
use proptest::prelude::*;

fn declared_names<E: Enumeration>() -> Vec<&'static str> {
    E::iter().map(E::name).collect()
}

fn check_total<E>(code: u8) -> Result<(), TestCaseError>
where
    E: Enumeration<Code = u8> + TryFrom<u8, Error = DomainError>,
{
    let rendered = E::render(code);
    match E::from_code(code) {
        Some(case) => {
            prop_assert_eq!(rendered, case.name());
            prop_assert!(E::try_from(code).is_ok());
        }
        None => {
            prop_assert_eq!(rendered, E::FALLBACK);
            prop_assert!(!declared_names::<E>().contains(&rendered));
            prop_assert!(E::try_from(code).is_err());
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn render_is_total_for_every_enumeration(code in any::<u8>()) {
        check_total::<Status>(code)?;
        check_total::<Priority>(code)?;
        check_total::<HttpMethod>(code)?;
        check_total::<Color>(code)?;
    }

    #[test]
    fn has_is_bitwise_containment(set in any::<u8>(), required in any::<u8>()) {
        prop_assert_eq!(Permission::has_bits(set, required), set & required == required);
        prop_assert!(Permission::has_bits(set, 0));
    }

    #[test]
    fn single_flag_membership(set in any::<u32>(), index in 0usize..5) {
        let (flag, label) = ConfigFlags::LABELS[index];
        let rendered = ConfigFlags::render_bits(set);
        let present = set & flag.bits() != 0;
        prop_assert_eq!(ConfigFlags::has_bits(set, flag.bits()), present);
        prop_assert_eq!(rendered.split(',').any(|part| part == label), present);
    }

    #[test]
    fn render_then_parse_keeps_known_bits(set in any::<u32>()) {
        let flags = ConfigFlags::from(set);
        let parsed = ConfigFlags::parse(&flags.render()).expect("rendered labels parse");
        prop_assert_eq!(parsed, flags & ConfigFlags::all());
    }

    #[test]
    fn rendered_labels_follow_declared_order(set in any::<u8>()) {
        let rendered = Permission::render_bits(set);
        if set & Permission::all().bits() == 0 {
            prop_assert_eq!(rendered, "None");
        } else {
            let order: Vec<usize> = rendered
                .split('|')
                .map(|part| {
                    Permission::LABELS.iter().position(|(_, label)| *label == part).expect("known label")
                })
                .collect();
            prop_assert!(order.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }
}
