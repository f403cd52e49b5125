use shared_resources::call::Call;
use shared_resources::notification::Notification;
use shared_resources::request::Request;

use super::actions::NotificationSink;
use super::error::ValidationError;
use super::mode::Mode;

/// Hall-call flags shared by every elevator in the building.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestBoard {
    requests: Vec<[bool; 2]>,
    num_floors: u8,
}

impl RequestBoard {
    pub fn new(num_floors: u8) -> Self {
        RequestBoard {
            requests: vec![[false; 2]; num_floors as usize],
            num_floors,
        }
    }

    pub fn num_floors(&self) -> u8 {
        self.num_floors
    }

    pub fn top_floor(&self) -> u8 {
        self.num_floors.saturating_sub(1)
    }

    /// Presses the hall button for `direction` on `floor`. Only the plain
    /// `Up`/`Down` modes name a button.
    pub fn register_hall_call(&mut self, floor: u8, direction: Mode) -> Result<(), ValidationError> {
        if floor >= self.num_floors {
            return Err(ValidationError::FloorOutOfRange { floor, num_floors: self.num_floors });
        }
        let call = Call::try_from(direction)?;
        let missing = match call {
            Call::HallUp => floor == self.top_floor(),
            Call::HallDown => floor == 0,
        };
        if missing {
            return Err(ValidationError::NoSuchButton { floor, call });
        }
        self.requests[floor as usize][call as usize] = true;
        Ok(())
    }

    /// Unpresses the button, notifying only if it was pressed. Returns
    /// whether anything changed.
    pub fn clear_hall_call(&mut self, call: Call, floor: u8, sink: &dyn NotificationSink) -> bool {
        let Some(slot) = self.requests.get_mut(floor as usize) else {
            return false;
        };
        let was_pressed = std::mem::replace(&mut slot[call as usize], false);
        if was_pressed {
            sink.notify(Notification::HallCallCleared { direction: call, floor });
        }
        was_pressed
    }

    pub fn clear_all(&mut self) {
        for floor in self.requests.iter_mut() {
            *floor = [false; 2];
        }
    }

    /// Out-of-range floors read as unpressed.
    pub fn is_requested(&self, floor: u8, call: Call) -> bool {
        self.requests
            .get(floor as usize)
            .map_or(false, |buttons| buttons[call as usize])
    }

    pub fn any_at(&self, floor: u8) -> bool {
        Call::iter_hall().any(|call| self.is_requested(floor, call))
    }

    pub fn is_empty(&self) -> bool {
        (0..self.num_floors).all(|floor| !self.any_at(floor))
    }

    pub fn get_requests_at_floor(&self, floor: u8) -> [bool; 2] {
        self.requests.get(floor as usize).copied().unwrap_or([false; 2])
    }

    pub fn pending(&self) -> impl Iterator<Item = Request> + '_ {
        (0..self.num_floors).flat_map(move |floor| {
            Call::iter_hall()
                .filter(move |call| self.is_requested(floor, *call))
                .map(move |call| Request::new(floor, call))
        })
    }
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::unbounded;

    use super::*;

    #[test]
    fn registers_and_reads_back() {
        let mut board = RequestBoard::new(5);
        board.register_hall_call(2, Mode::Up).unwrap();
        board.register_hall_call(2, Mode::Up).unwrap();
        board.register_hall_call(4, Mode::Down).unwrap();

        assert!(board.is_requested(2, Call::HallUp));
        assert!(!board.is_requested(2, Call::HallDown));
        assert_eq!(board.get_requests_at_floor(4), [false, true]);
        assert_eq!(
            board.pending().collect::<Vec<_>>(),
            vec![Request::new(2, Call::HallUp), Request::new(4, Call::HallDown)]
        );
    }

    #[test]
    fn missing_buttons_are_rejected() {
        let mut board = RequestBoard::new(5);
        assert_eq!(
            board.register_hall_call(4, Mode::Up),
            Err(ValidationError::NoSuchButton { floor: 4, call: Call::HallUp })
        );
        assert_eq!(
            board.register_hall_call(0, Mode::Down),
            Err(ValidationError::NoSuchButton { floor: 0, call: Call::HallDown })
        );
        assert_eq!(
            board.register_hall_call(5, Mode::Down),
            Err(ValidationError::FloorOutOfRange { floor: 5, num_floors: 5 })
        );
        assert_eq!(
            board.register_hall_call(2, Mode::RetrieveAboveUp),
            Err(ValidationError::NotDirectional(Mode::RetrieveAboveUp))
        );
        assert!(board.is_empty());
    }

    #[test]
    fn clearing_notifies_only_when_pressed() {
        let (tx, rx) = unbounded::<Notification>();
        let mut board = RequestBoard::new(5);
        board.register_hall_call(3, Mode::Down).unwrap();

        assert!(board.clear_hall_call(Call::HallDown, 3, &tx));
        assert!(!board.clear_hall_call(Call::HallDown, 3, &tx));
        assert!(!board.clear_hall_call(Call::HallUp, 3, &tx));

        let events: Vec<Notification> = rx.try_iter().collect();
        assert_eq!(events, vec![Notification::HallCallCleared { direction: Call::HallDown, floor: 3 }]);
        assert!(board.is_empty());
    }

    #[test]
    fn clear_all_resets_every_floor() {
        let mut board = RequestBoard::new(4);
        board.register_hall_call(1, Mode::Up).unwrap();
        board.register_hall_call(3, Mode::Down).unwrap();
        board.clear_all();
        assert!(board.is_empty());
        assert_eq!(board.pending().count(), 0);
    }
}
