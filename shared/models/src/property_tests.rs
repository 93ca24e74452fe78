//! Property-based tests for the customer domain models.
//!
//! Validates the universal validation properties: whitespace-only required
//! fields are always rejected, trimmed non-empty values are always accepted,
//! and normalization never changes a value that is already trimmed.

use proptest::prelude::*;
use validator::Validate;

use crate::{ClienteCreate, ClienteUpdate};

prop_compose! {
    fn arb_email()(
        local in "[a-z]{3,10}",
        domain in "[a-z]{3,10}",
        tld in "[a-z]{2,4}"
    ) -> String {
        format!("{}@{}.{}", local, domain, tld)
    }
}

prop_compose! {
    fn arb_whitespace()(spaces in " {0,8}") -> String {
        spaces
    }
}

fn create_with(cpf: String, nome: String, email: String) -> ClienteCreate {
    ClienteCreate {
        cpf,
        nome,
        email,
        telefone: None,
        agencia: None,
        conta: None,
        tipo_conta: None,
        cartao_debito: None,
        cartao_credito: None,
        bandeira_cartao_credito: None,
    }
}

proptest! {
    #[test]
    fn whitespace_only_cpf_always_rejected(
        cpf in arb_whitespace(),
        nome in "[A-Za-z ]{1,30}",
        email in arb_email()
    ) {
        let cliente = create_with(cpf, nome, email);
        prop_assert!(cliente.validate().is_err());
    }

    #[test]
    fn whitespace_only_nome_always_rejected(
        cpf in "[0-9]{11}",
        nome in arb_whitespace(),
        email in arb_email()
    ) {
        let cliente = create_with(cpf, nome, email);
        prop_assert!(cliente.validate().is_err());
    }

    #[test]
    fn well_formed_create_always_accepted(
        cpf in "[0-9]{11}",
        nome in "[A-Za-z]{1,30}",
        email in arb_email()
    ) {
        let cliente = create_with(cpf, nome, email);
        prop_assert!(cliente.validate().is_ok());
    }

    #[test]
    fn normalization_is_idempotent(
        cpf in " {0,3}[0-9]{11} {0,3}",
        nome in " {0,3}[A-Za-z]{1,30} {0,3}",
        email in arb_email()
    ) {
        let cliente = create_with(cpf, nome, email);
        let once = cliente.normalized();
        let twice = once.normalized();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn update_with_whitespace_nome_always_rejected(nome in arb_whitespace()) {
        let update = ClienteUpdate {
            nome: Some(nome),
            ..Default::default()
        };
        prop_assert!(update.validate().is_err());
    }
}
