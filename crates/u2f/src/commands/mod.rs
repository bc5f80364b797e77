/// Implement `ApduCommand` for a U2F request.
///
/// Every U2F request carries P2 `00` and Le `00`, so only CLA, INS, P1 and the
/// data field vary. P1 and data take the command by reference.
macro_rules! u2f_apdu {
    (
        $command:ty {
            cla: $cla:expr,
            ins: $ins:expr,
            p1: |$p1_self:tt| $p1:expr,
            data: |$data_self:tt| $data:expr $(,)?
        }
    ) => {
        impl fidonfc_apdu_core::ApduCommand for $command {
            fn class(&self) -> u8 {
                $cla
            }

            fn instruction(&self) -> u8 {
                $ins
            }

            fn p1(&self) -> u8 {
                let $p1_self = self;
                $p1
            }

            fn p2(&self) -> u8 {
                0x00
            }

            fn data(&self) -> Option<&[u8]> {
                let $data_self = self;
                Some($data)
            }

            fn expected_length(&self) -> Option<fidonfc_apdu_core::command::ExpectedLength> {
                Some(0)
            }
        }
    };
}

mod authenticate;
mod get_info;
mod register;

pub use authenticate::{AuthenticateCommand, ControlByte};
pub use get_info::GetInfoCommand;
pub use register::RegisterCommand;
